use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Result;
use crate::state::Language;

const BUILTIN: &str = include_str!("../assets/translations.json");

/// Static per-language strings keyed by `data-translate` values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The table shipped with the page.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    /// Returns `None` when the language or key is unmapped, and also for
    /// empty strings: callers keep the element's existing text in all three
    /// cases.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)?
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}
