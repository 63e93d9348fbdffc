//! Browser bindings over `web-sys`.

use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

use crate::app::{self, Page};
use crate::config::LandingConfig;
use crate::dom::{Callback, ClickHandler, ClickOutcome, Dom};
use crate::error::{Error, Result};
use crate::state::{MemoryStore, PreferenceStore};
use crate::translations::TranslationTable;

pub struct WebDom {
    window: Window,
    document: Document,
    root: Element,
}

impl WebDom {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        let root = document.document_element().ok_or(Error::NoDocument)?;
        Ok(Self {
            window,
            document,
            root,
        })
    }

    fn local_storage(&self) -> Option<Storage> {
        self.window.local_storage().ok().flatten()
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn root(&self) -> Element {
        self.root.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            warn!("Invalid selector {selector}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&self, el: &Element, name: &str, value: &str) {
        if let Err(e) = el.set_attribute(name, value) {
            warn!("Failed to set {name}: {:?}", e);
        }
    }

    fn text(&self, el: &Element) -> String {
        el.text_content().unwrap_or_default()
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_style(&self, el: &Element, property: &str, value: &str) {
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(e) = html.style().set_property(property, value) {
            warn!("Failed to set style {property}: {:?}", e);
        }
    }

    fn viewport_top(&self, el: &Element) -> f64 {
        el.get_bounding_client_rect().top()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn on_click(&self, el: &Element, mut handler: ClickHandler) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if handler() == ClickOutcome::Prevented {
                event.prevent_default();
            }
        });
        if let Err(e) = el.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref()) {
            warn!("Failed to attach click listener: {:?}", e);
        }
        // Listeners live as long as the page.
        callback.forget();
    }

    fn on_load(&self, callback: Callback) {
        // The wasm module starts after an async fetch, so `load` may be over.
        if self.document.ready_state() == "complete" {
            callback();
            return;
        }
        let callback = Closure::once_into_js(move || callback());
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("load", callback.unchecked_ref())
        {
            warn!("Failed to attach load listener: {:?}", e);
        }
    }

    fn next_frame(&self, callback: Callback) {
        let callback = Closure::once_into_js(move || callback());
        if let Err(e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            warn!("Failed to request animation frame: {:?}", e);
        }
    }
}

/// `window.localStorage`, holding plain string values.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("Failed to persist {key}: {:?}", e);
        }
    }
}

/// Binds the script to the live document and runs it.
pub fn start() -> Result<()> {
    let dom = WebDom::new()?;
    let store: Box<dyn PreferenceStore> = match dom.local_storage() {
        Some(storage) => Box::new(LocalStore::new(storage)),
        None => {
            warn!("localStorage unavailable, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    };
    let translations = TranslationTable::builtin()?;
    let page = Page::new(dom, store, LandingConfig::default(), translations)?;

    app::boot(Rc::new(page));
    info!("Landing page ready");
    Ok(())
}
