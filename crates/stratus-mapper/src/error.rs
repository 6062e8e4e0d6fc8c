//! Mapper error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Provisioning model has no datacenter")]
    MissingDatacenter,

    #[error("{kind} '{name}' references an unknown {target}")]
    UnresolvedReference {
        kind: &'static str,
        name: String,
        target: &'static str,
    },

    #[error("Could not serialize definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, MapperError>;
