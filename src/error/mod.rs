//! This module defines the error type for this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A description declared a group it cannot enumerate
    #[error("Invalid description: group `{group}` cannot be resolved")]
    InvalidDescription { group: String },
    /// A vocabulary failed validation
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
    /// A vocabulary document could not be parsed
    #[error("Error parsing vocabulary: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
