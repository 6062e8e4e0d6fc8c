use super::ProviderContext;
use crate::deferred::Deferred;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

/// One concrete member of an instance group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub name: String,

    #[serde(rename = "type")]
    pub instance_type: String,

    pub image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Ipv4Addr>,

    pub network_name: String,
    pub network_aws_id: Deferred,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair: Option<String>,

    pub assign_elastic_ip: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    pub security_groups: Vec<String>,
    pub security_group_aws_ids: Vec<Deferred>,
    pub volumes: Vec<InstanceVolume>,

    pub instance_aws_id: String,
    pub public_ip: String,
    pub elastic_ip: String,

    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceVolume {
    pub volume: String,
    pub volume_aws_id: Deferred,
    pub device: String,
}

component!(Instance, instance_aws_id);

impl Reconcilable for Instance {
    fn has_changed(&self, previous: &Self) -> bool {
        self.instance_type != previous.instance_type
            || self.security_groups != previous.security_groups
    }

    fn inherit(&mut self, previous: &Self) {
        self.instance_aws_id = previous.instance_aws_id.clone();
        self.public_ip = previous.public_ip.clone();
        self.elastic_ip = previous.elastic_ip.clone();
        self.status = previous.status;
    }

    component_status!();
}
