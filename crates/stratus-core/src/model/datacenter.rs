use serde::{Deserialize, Serialize};

/// Provider account and region a service is deployed into.
///
/// Passed with every request and never cached between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datacenter {
    pub name: String,

    /// Provider type, e.g. `aws` or `aws-fake`
    #[serde(rename = "type")]
    pub provider_type: String,

    pub region: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
}

impl Datacenter {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider_type: "aws".to_string(),
            region: region.into(),
            ..Default::default()
        }
    }
}
