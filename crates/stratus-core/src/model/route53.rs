use serde::{Deserialize, Serialize};

/// A hosted DNS zone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route53Zone {
    /// Zone domain, e.g. `example.com`
    pub name: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub private: bool,

    pub records: Vec<Record>,
}

/// A record set inside a zone
///
/// A record carries literal `values` and at most one kind of target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub entry: String,

    #[serde(rename = "type")]
    pub record_type: String,

    /// Instance groups, resolved to their (public) addresses
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub loadbalancers: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rds_clusters: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rds_instances: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    pub ttl: i64,
}
