use serde::{Deserialize, Serialize};

/// An elastic load balancer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Elb {
    pub name: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,

    /// Instance groups behind the balancer
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<String>,

    pub listeners: Vec<ElbListener>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElbListener {
    pub from_port: i64,
    pub to_port: i64,
    pub protocol: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_cert: Option<String>,
}
