use std::rc::Rc;

use log::{debug, info};

use crate::app::Page;
use crate::dom::{ClickOutcome, Dom};
use crate::state::Language;

/// Rewrites every `data-translate` element from the table, then updates the
/// toggle label and stored preference.
///
/// Elements whose key has no non-empty entry keep the text they already
/// have, so the empty `feat_*` entries never blank their static fallback.
pub fn apply<D: Dom>(page: &Page<D>, language: Language) {
    let config = &page.config;
    let dom = &page.dom;

    for el in dom.query_all(&config.translate_selector()) {
        let Some(key) = dom.attribute(&el, config.translate_attribute) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        match page.translations.lookup(language, &key) {
            Some(text) => dom.set_text(&el, text),
            None => debug!("No {} text for {key}, keeping existing", language.as_str()),
        }
    }

    let label = match language {
        Language::Pt => config.pt_label,
        Language::En => config.en_label,
    };
    dom.set_text(&page.lang_toggle, label);
    page.store.set(config.lang_storage_key, language.as_str());
    page.state.borrow_mut().language = language;

    info!("Applied {} translations", language.as_str());
}

pub fn toggle<D: Dom>(page: &Page<D>) {
    let next = page.state.borrow().language.toggled();
    apply(page, next);
}

pub fn bind<D: Dom + 'static>(page: &Rc<Page<D>>) {
    let handler_page = Rc::clone(page);
    page.dom.on_click(
        &page.lang_toggle,
        Box::new(move || {
            toggle(&handler_page);
            ClickOutcome::Default
        }),
    );
}
