use thiserror::Error;

/// Failures that stop the page script before any handler is attached.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("required element #{id} is missing from the page")]
    MissingElement { id: String },

    #[error("translation table is malformed: {0}")]
    Translations(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
