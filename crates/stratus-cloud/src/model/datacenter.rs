use serde::{Deserialize, Serialize};

/// The singleton datacenter entry deferred references point at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datacenter {
    pub name: String,

    #[serde(rename = "type")]
    pub provider_type: String,

    pub region: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
}
