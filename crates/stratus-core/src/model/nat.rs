use serde::{Deserialize, Serialize};

/// A NAT gateway placed in a public network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NatGateway {
    pub name: String,
    pub public_network: String,
}
