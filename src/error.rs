use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Unknown dietary index: {0}")]
    UnknownIndex(String),

    #[error("Invalid index '{index}': {reason}")]
    InvalidIndex { index: String, reason: String },

    #[error("Invalid category alias '{alias}' -> '{target}': target is itself an alias")]
    InvalidAlias { alias: String, target: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DietError {
    pub(crate) fn invalid_index(index: &str, reason: impl Into<String>) -> Self {
        DietError::InvalidIndex {
            index: index.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DietError>;
