use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::config::LandingConfig;
use crate::controllers::{animator, language, scroll, theme};
use crate::dom::Dom;
use crate::error::{Error, Result};
use crate::state::{AppState, PreferenceStore};
use crate::translations::TranslationTable;

/// Everything the controllers share for the lifetime of the page.
pub struct Page<D: Dom> {
    pub dom: D,
    pub store: Box<dyn PreferenceStore>,
    pub config: LandingConfig,
    pub translations: TranslationTable,
    pub state: RefCell<AppState>,
    pub theme_toggle: D::Element,
    pub lang_toggle: D::Element,
}

impl<D: Dom> Page<D> {
    /// Loads persisted preferences and checks that both toggles exist.
    pub fn new(
        dom: D,
        store: Box<dyn PreferenceStore>,
        config: LandingConfig,
        translations: TranslationTable,
    ) -> Result<Self> {
        let theme_toggle = require(&dom, config.theme_toggle_id)?;
        let lang_toggle = require(&dom, config.lang_toggle_id)?;
        let state = AppState::load(store.as_ref(), &config);

        Ok(Self {
            dom,
            store,
            config,
            translations,
            state: RefCell::new(state),
            theme_toggle,
            lang_toggle,
        })
    }
}

fn require<D: Dom>(dom: &D, id: &str) -> Result<D::Element> {
    dom.element_by_id(id).ok_or_else(|| Error::MissingElement { id: id.to_string() })
}

/// Applies persisted state and wires every handler, in page-script order.
pub fn boot<D: Dom + 'static>(page: Rc<Page<D>>) {
    let state = *page.state.borrow();
    info!(
        "Booting landing page (theme={}, lang={})",
        state.theme.as_str(),
        state.language.as_str()
    );

    theme::apply(&page, state.theme);
    theme::bind(&page);

    language::apply(&page, state.language);
    language::bind(&page);

    animator::schedule(&page);
    scroll::bind(&page);
}
