use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    ConfigDirNotFound,

    #[error("Failed to parse configuration: {0}")]
    Kdl(#[from] kdl::KdlError),

    #[error("Invalid value for '{node}': {reason}")]
    InvalidValue { node: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
