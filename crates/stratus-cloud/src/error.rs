//! Provisioning model error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Model store error: {0}")]
    StoreError(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Workflow error: {0}")]
    Workflow(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
