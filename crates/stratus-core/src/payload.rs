//! Request payload
//!
//! Every mapping request carries the service id, the id of the service build
//! it replaces (if any), the target datacenter and the authored definition.

use crate::error::Result;
use crate::model::{Datacenter, Definition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    /// Id of the service build being mapped
    pub id: String,

    /// Id of the previous build, when this request updates a service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_id: Option<String>,

    pub datacenter: Datacenter,

    pub service: Definition,
}

impl Payload {
    pub fn new(id: impl Into<String>, datacenter: Datacenter, service: Definition) -> Self {
        Self {
            id: id.into(),
            previous_id: None,
            datacenter,
            service,
        }
    }

    pub fn with_previous(mut self, previous_id: impl Into<String>) -> Self {
        self.previous_id = Some(previous_id.into());
        self
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// The previous build id, ignoring empty strings
    pub fn previous(&self) -> Option<&str> {
        self.previous_id.as_deref().filter(|id| !id.is_empty())
    }
}
