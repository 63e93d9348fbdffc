use std::rc::Rc;

use log::info;

use crate::app::Page;
use crate::dom::{ClickOutcome, Dom};
use crate::state::Theme;

/// Sets the root theme attribute, the toggle glyph and the stored preference.
pub fn apply<D: Dom>(page: &Page<D>, theme: Theme) {
    let config = &page.config;
    let dom = &page.dom;

    dom.set_attribute(&dom.root(), config.theme_attribute, theme.as_str());
    let label = match theme {
        Theme::Light => config.light_label,
        Theme::Dark => config.dark_label,
    };
    dom.set_text(&page.theme_toggle, label);
    page.store.set(config.theme_storage_key, theme.as_str());
    page.state.borrow_mut().theme = theme;

    info!("Applied {} theme", theme.as_str());
}

/// The theme currently shown on the root element.
pub fn current<D: Dom>(page: &Page<D>) -> Theme {
    let dom = &page.dom;
    dom.attribute(&dom.root(), page.config.theme_attribute)
        .map(|value| Theme::from_stored(&value))
        .unwrap_or(Theme::Dark)
}

pub fn toggle<D: Dom>(page: &Page<D>) {
    apply(page, current(page).toggled());
}

pub fn bind<D: Dom + 'static>(page: &Rc<Page<D>>) {
    let handler_page = Rc::clone(page);
    page.dom.on_click(
        &page.theme_toggle,
        Box::new(move || {
            toggle(&handler_page);
            ClickOutcome::Default
        }),
    );
}
