//! Lifecycle status of a provisioning component

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported by the workflow executor for a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Processing,
    Completed,
    Errored,
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Whether the last operation on the component finished successfully
    pub fn is_completed(self) -> bool {
        self == Status::Completed
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "pending"),
            Status::Processing => write!(f, "processing"),
            Status::Completed => write!(f, "completed"),
            Status::Errored => write!(f, "errored"),
            Status::Unknown => write!(f, "unknown"),
        }
    }
}
