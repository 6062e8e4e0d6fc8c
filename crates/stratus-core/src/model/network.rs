use serde::{Deserialize, Serialize};

/// A subnet inside the service VPC
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub name: String,

    /// CIDR block, e.g. `10.0.1.0/24`
    pub subnet: String,

    /// Whether the network routes through an internet gateway
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub public: bool,

    /// NAT gateway used for outbound traffic of a private network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_gateway: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
}
