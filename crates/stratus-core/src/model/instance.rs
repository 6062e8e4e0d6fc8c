use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// An instance group
///
/// Expands at mapping time into `count` concrete instances with sequential
/// name suffixes and IP addresses starting at `start_ip`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub name: String,

    #[serde(rename = "type")]
    pub instance_type: String,

    pub image: String,
    pub count: u32,
    pub network: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_ip: Option<Ipv4Addr>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub elastic_ip: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<InstanceVolume>,
}

impl Instance {
    /// Address of the `index`-th (zero based) member of the group.
    ///
    /// Only the last octet is incremented; `None` once it would wrap.
    pub fn address(&self, index: u32) -> Option<Ipv4Addr> {
        let [a, b, c, d] = self.start_ip?.octets();
        let last = u8::try_from(u32::from(d).checked_add(index)?).ok()?;
        Some(Ipv4Addr::new(a, b, c, last))
    }
}

/// Attachment of an EBS volume group to an instance group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceVolume {
    /// Name of the EBS volume group
    pub volume: String,

    /// Device path, e.g. `/dev/sdp`
    pub device: String,
}
