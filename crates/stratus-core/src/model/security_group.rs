use serde::{Deserialize, Serialize};

/// A security group with its ingress and egress rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityGroup {
    pub name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ingress: Vec<SecurityGroupRule>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub egress: Vec<SecurityGroupRule>,
}

/// A single security group rule
///
/// `ip` is one of `any`, a declared network name, a CIDR or a bare IP.
/// Ports are `any` or an integer valid for the protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityGroupRule {
    pub ip: String,

    #[serde(deserialize_with = "super::port::deserialize")]
    pub from_port: String,

    #[serde(deserialize_with = "super::port::deserialize")]
    pub to_port: String,

    pub protocol: String,
}
