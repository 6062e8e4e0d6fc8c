use super::ProviderContext;
use crate::deferred::Deferred;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdsCluster {
    pub name: String,
    pub engine: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    pub availability_zones: Vec<String>,
    pub security_groups: Vec<String>,
    pub security_group_aws_ids: Vec<Deferred>,
    pub networks: Vec<String>,
    pub network_aws_ids: Vec<Deferred>,

    pub database_name: String,
    pub database_username: String,
    pub database_password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_window: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source: Option<String>,

    pub final_snapshot: bool,

    pub arn: String,
    pub endpoint: String,

    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdsInstance {
    pub name: String,
    pub size: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Full name of the cluster the instance joins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,

    pub public: bool,
    pub multi_az: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_tier: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_iops: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    pub security_groups: Vec<String>,
    pub security_group_aws_ids: Vec<Deferred>,
    pub networks: Vec<String>,
    pub network_aws_ids: Vec<Deferred>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_password: Option<String>,

    pub auto_upgrade: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_window: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window: Option<String>,

    pub final_snapshot: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    pub arn: String,
    pub endpoint: String,

    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

/// Differs only when both sides declare a value
fn differs<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a != b)
}

component!(RdsCluster, arn);
component!(RdsInstance, arn);

impl Reconcilable for RdsCluster {
    fn has_changed(&self, previous: &Self) -> bool {
        differs(&self.port, &previous.port)
            || self.database_password != previous.database_password
            || differs(&self.backup_retention, &previous.backup_retention)
            || self.backup_window != previous.backup_window
            || self.maintenance_window != previous.maintenance_window
            || self.networks != previous.networks
            || self.security_groups != previous.security_groups
    }

    fn inherit(&mut self, previous: &Self) {
        self.arn = previous.arn.clone();
        self.endpoint = previous.endpoint.clone();
        self.status = previous.status;
    }

    component_status!();
}

impl Reconcilable for RdsInstance {
    fn has_changed(&self, previous: &Self) -> bool {
        self.size != previous.size
            || self.engine_version != previous.engine_version
            || differs(&self.port, &previous.port)
            || differs(&self.storage_size, &previous.storage_size)
            || differs(&self.storage_iops, &previous.storage_iops)
            || self.storage_type != previous.storage_type
            || self.multi_az != previous.multi_az
            || differs(&self.promotion_tier, &previous.promotion_tier)
            || self.auto_upgrade != previous.auto_upgrade
            || differs(&self.backup_retention, &previous.backup_retention)
            || self.backup_window != previous.backup_window
            || self.maintenance_window != previous.maintenance_window
            || self.database_password != previous.database_password
            || self.public != previous.public
            || self.security_groups != previous.security_groups
            || self.networks != previous.networks
    }

    fn inherit(&mut self, previous: &Self) {
        self.arn = previous.arn.clone();
        self.endpoint = previous.endpoint.clone();
        self.status = previous.status;
    }

    component_status!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster() -> RdsCluster {
        RdsCluster {
            name: "dc-svc-aurora".to_string(),
            engine: "aurora".to_string(),
            port: Some(3306),
            database_password: "secret123".to_string(),
            networks: vec!["dc-svc-db-a".to_string(), "dc-svc-db-b".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_cluster_mutable_fields() {
        let old = cluster();

        let mut c = cluster();
        c.port = Some(3307);
        assert!(c.has_changed(&old));

        let mut c = cluster();
        c.port = None;
        assert!(!c.has_changed(&old));

        let mut c = cluster();
        c.maintenance_window = Some("Mon:22:00-Mon:23:00".to_string());
        assert!(c.has_changed(&old));

        // creation-only
        let mut c = cluster();
        c.database_name = "other".to_string();
        c.engine_version = Some("5.6".to_string());
        assert!(!c.has_changed(&old));
    }

    #[test]
    fn test_instance_mutable_fields() {
        let old = RdsInstance {
            name: "dc-svc-db".to_string(),
            size: "db.r3.large".to_string(),
            storage_size: Some(100),
            ..Default::default()
        };

        let mut i = old.clone();
        i.size = "db.r3.xlarge".to_string();
        assert!(i.has_changed(&old));

        let mut i = old.clone();
        i.storage_size = Some(200);
        assert!(i.has_changed(&old));

        let mut i = old.clone();
        i.database_name = Some("other".to_string());
        i.availability_zone = Some("eu-west-1a".to_string());
        assert!(!i.has_changed(&old));
    }
}
