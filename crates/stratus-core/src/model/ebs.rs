use serde::{Deserialize, Serialize};

/// An EBS volume group
///
/// Expands into `count` volumes that share a `volume_group` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EbsVolume {
    pub name: String,

    #[serde(rename = "type")]
    pub volume_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i64>,

    pub count: u32,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub encrypted: bool,

    /// KMS key id, required when `encrypted` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key_id: Option<String>,

    pub availability_zone: String,
}
