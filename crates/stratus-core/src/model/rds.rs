use serde::{Deserialize, Serialize};

/// Backup settings shared by clusters and instances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdsBackup {
    /// Daily window, `hh24:mi-hh24:mi`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<String>,

    /// Retention in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<i64>,
}

impl RdsBackup {
    pub fn is_empty(&self) -> bool {
        self.window.is_none() && self.retention.is_none()
    }
}

/// A managed database cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdsCluster {
    pub name: String,
    pub engine: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,

    pub database_name: String,
    pub database_username: String,
    pub database_password: String,

    #[serde(skip_serializing_if = "RdsBackup::is_empty")]
    pub backups: RdsBackup,

    /// Weekly window, `ddd:hh24:mi-ddd:hh24:mi`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub final_snapshot: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdsStorage {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i64>,
}

impl RdsStorage {
    pub fn is_empty(&self) -> bool {
        self.storage_type.is_none() && self.size.is_none() && self.iops.is_none()
    }
}

/// A managed database instance, standalone or attached to a cluster
///
/// An attached instance inherits engine, credentials and port from its
/// cluster and must not declare them itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdsInstance {
    pub name: String,

    /// Instance class, e.g. `db.r3.large`
    pub size: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub public: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub multi_az: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_tier: Option<i64>,

    #[serde(skip_serializing_if = "RdsStorage::is_empty")]
    pub storage: RdsStorage,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_password: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub auto_upgrade: bool,

    #[serde(skip_serializing_if = "RdsBackup::is_empty")]
    pub backups: RdsBackup,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub final_snapshot: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}
