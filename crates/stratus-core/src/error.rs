//! Error types for authored definitions

use thiserror::Error;

/// A single validation failure.
///
/// Only the first violation of a definition is ever reported, so this carries
/// one human readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while reading a definition or payload
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Invalid definition: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, DefinitionError>;
