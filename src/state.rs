//! Persisted preferences and the in-memory state they load into.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Deserialize;

use crate::config::LandingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than the literal `light` reads as dark.
    pub fn from_stored(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    #[default]
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    /// Anything other than `pt` reads as English.
    pub fn from_stored(value: &str) -> Self {
        if value == "pt" {
            Language::Pt
        } else {
            Language::En
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Pt,
        }
    }
}

/// Durable string key/value storage scoped to the page origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Store that lives only as long as the page.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    pub theme: Theme,
    pub language: Language,
}

impl AppState {
    /// Reads both preferences, falling back to dark and English.
    pub fn load(store: &dyn PreferenceStore, config: &LandingConfig) -> Self {
        let theme = store
            .get(config.theme_storage_key)
            .map(|v| Theme::from_stored(&v))
            .unwrap_or_default();
        let language = store
            .get(config.lang_storage_key)
            .map(|v| Language::from_stored(&v))
            .unwrap_or_default();
        Self { theme, language }
    }
}
