//! Request failures
//!
//! Every variant renders as the message of the `{"error": ...}` reply.

use stratus_cloud::CloudError;
use stratus_core::ValidationError;
use stratus_mapper::MapperError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Failed to parse payload.")]
    Payload { reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to {operation}.")]
    Dependency {
        operation: &'static str,
        #[source]
        source: CloudError,
    },

    #[error("Could not generate workflow.")]
    Workflow(#[source] CloudError),

    #[error("VPC ID cannot change between builds.")]
    VpcChanged,

    #[error("Unsupported provider type '{0}'.")]
    UnsupportedProvider(String),

    #[error("Failed to build definition: {0}")]
    Mapping(#[from] MapperError),

    #[error("Failed marshal output message.")]
    Output(#[source] CloudError),
}

impl HandlerError {
    pub fn payload(reason: impl ToString) -> Self {
        HandlerError::Payload {
            reason: reason.to_string(),
        }
    }

    pub fn dependency(operation: &'static str) -> impl FnOnce(CloudError) -> Self {
        move |source| HandlerError::Dependency { operation, source }
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;
