use super::ProviderContext;
use crate::deferred::Deferred;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A load balancer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Elb {
    pub name: String,
    pub is_private: bool,
    pub dns_name: String,
    pub listeners: Vec<ElbListener>,

    pub networks: Vec<String>,
    pub network_aws_ids: Vec<Deferred>,

    /// Authored instance group names
    pub instances: Vec<String>,
    /// Every concrete member of those groups
    pub instance_names: Vec<String>,
    pub instance_aws_ids: Vec<Deferred>,

    pub security_groups: Vec<String>,
    pub security_group_aws_ids: Vec<Deferred>,

    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElbListener {
    pub from_port: i64,
    pub to_port: i64,

    /// Upper-cased: HTTP, HTTPS, TCP or SSL
    pub protocol: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_cert: Option<String>,
}

component!(Elb, dns_name);

impl Reconcilable for Elb {
    fn has_changed(&self, previous: &Self) -> bool {
        self.listeners != previous.listeners
            || self.instance_names != previous.instance_names
            || self.security_groups != previous.security_groups
    }

    fn inherit(&mut self, previous: &Self) {
        self.dns_name = previous.dns_name.clone();
        self.status = previous.status;
    }

    component_status!();
}
