//! The provisioning model
//!
//! A flat, per-collection representation of a service where every component
//! has a deterministic name and the provider-facing fields other components
//! need are expressed as [`Deferred`](crate::Deferred) references.

macro_rules! component {
    ($ty:ty, $id:ident) => {
        impl $crate::component::Component for $ty {
            fn tags(&self) -> &std::collections::BTreeMap<String, String> {
                &self.tags
            }

            fn provider_id(&self) -> &str {
                &self.$id
            }

            fn component_name(&self) -> &str {
                &self.name
            }
        }
    };
}

macro_rules! component_status {
    () => {
        fn status(&self) -> $crate::status::Status {
            self.status
        }

        fn set_status(&mut self, status: $crate::status::Status) {
            self.status = status;
        }
    };
}

mod datacenter;
mod ebs;
mod elb;
mod firewall;
mod instance;
mod nat;
mod network;
mod provider;
mod rds;
mod route53;
mod s3;
mod vpc;

pub use datacenter::Datacenter;
pub use ebs::EbsVolume;
pub use elb::{Elb, ElbListener};
pub use firewall::{ANY_PROTOCOL, Firewall, FirewallRule, FirewallRules};
pub use instance::{Instance, InstanceVolume};
pub use nat::Nat;
pub use network::Network;
pub use provider::{ProviderContext, vpc_reference};
pub use rds::{RdsCluster, RdsInstance};
pub use route53::{Record, Route53Zone};
pub use s3::{S3Bucket, S3Grantee};
pub use vpc::Vpc;

use crate::action::{Action, Plan};
use crate::reconcile::Resources;
use crate::workflow::{Workflow, WorkflowCounts};
use serde::{Deserialize, Serialize};

/// Collection names as used in deferred references and workflow vertices
pub const DATACENTERS: &str = "datacenters";
pub const VPCS: &str = "vpcs";
pub const NETWORKS: &str = "networks";
pub const INSTANCES: &str = "instances";
pub const FIREWALLS: &str = "firewalls";
pub const NATS: &str = "nats";
pub const ELBS: &str = "elbs";
pub const RDS_CLUSTERS: &str = "rds_clusters";
pub const RDS_INSTANCES: &str = "rds_instances";
pub const EBS_VOLUMES: &str = "ebs_volumes";
pub const S3S: &str = "s3s";
pub const ROUTE53S: &str = "route53s";

/// The service graph handed to the workflow executor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisioningModel {
    /// Service id
    pub id: String,

    /// Service name
    pub name: String,

    /// Provider type of the datacenter, e.g. `aws`
    #[serde(rename = "type")]
    pub provider_type: String,

    pub workflow: Workflow,

    pub datacenters: Resources<Datacenter>,
    pub vpcs: Resources<Vpc>,
    pub networks: Resources<Network>,
    pub instances: Resources<Instance>,
    pub firewalls: Resources<Firewall>,
    pub nats: Resources<Nat>,
    pub elbs: Resources<Elb>,
    pub rds_clusters: Resources<RdsCluster>,
    pub rds_instances: Resources<RdsInstance>,
    pub ebs_volumes: Resources<EbsVolume>,
    pub s3s: Resources<S3Bucket>,
    pub route53s: Resources<Route53Zone>,
}

impl ProvisioningModel {
    pub fn from_json(content: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(content)?)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn datacenter(&self) -> Option<&Datacenter> {
        self.datacenters.items.first()
    }

    /// `<datacenter>-<service>-`, the prefix of every component name
    pub fn prefix(&self) -> String {
        let datacenter = self.datacenter().map(|d| d.name.as_str()).unwrap_or_default();
        format!("{}-{}-", datacenter, self.name)
    }

    /// Provider id of the service VPC, once known
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpcs
            .items
            .first()
            .map(|v| v.vpc_id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Copy provider-assigned data from the live model
    pub fn inherit(&mut self, previous: &ProvisioningModel) {
        self.vpcs.inherit(&previous.vpcs);
        self.networks.inherit(&previous.networks);
        self.instances.inherit(&previous.instances);
        self.firewalls.inherit(&previous.firewalls);
        self.nats.inherit(&previous.nats);
        self.elbs.inherit(&previous.elbs);
        self.rds_clusters.inherit(&previous.rds_clusters);
        self.rds_instances.inherit(&previous.rds_instances);
        self.ebs_volumes.inherit(&previous.ebs_volumes);
        self.s3s.inherit(&previous.s3s);
        self.route53s.inherit(&previous.route53s);
    }

    /// Compute the create/update/delete sets of every collection
    pub fn reconcile(&mut self, previous: &ProvisioningModel) {
        self.vpcs.reconcile(&previous.vpcs);
        self.networks.reconcile(&previous.networks);
        self.instances.reconcile(&previous.instances);
        self.firewalls.reconcile(&previous.firewalls);
        self.nats.reconcile(&previous.nats);
        self.elbs.reconcile(&previous.elbs);
        self.rds_clusters.reconcile(&previous.rds_clusters);
        self.rds_instances.reconcile(&previous.rds_instances);
        self.ebs_volumes.reconcile(&previous.ebs_volumes);
        self.s3s.reconcile(&previous.s3s);
        self.route53s.reconcile(&previous.route53s);

        tracing::debug!(
            service = %self.name,
            "reconciled model: {}",
            self.plan().summary()
        );
    }

    /// Schedule every component of every collection for deletion
    pub fn mark_all_for_deletion(&mut self) {
        self.vpcs.mark_all_for_deletion();
        self.networks.mark_all_for_deletion();
        self.instances.mark_all_for_deletion();
        self.firewalls.mark_all_for_deletion();
        self.nats.mark_all_for_deletion();
        self.elbs.mark_all_for_deletion();
        self.rds_clusters.mark_all_for_deletion();
        self.rds_instances.mark_all_for_deletion();
        self.ebs_volumes.mark_all_for_deletion();
        self.s3s.mark_all_for_deletion();
        self.route53s.mark_all_for_deletion();
    }

    /// Per-operation counts of every collection
    pub fn counts(&self) -> WorkflowCounts {
        let mut counts = WorkflowCounts::new();
        counts.record(VPCS, &self.vpcs);
        counts.record(NETWORKS, &self.networks);
        counts.record(INSTANCES, &self.instances);
        counts.record(FIREWALLS, &self.firewalls);
        counts.record(NATS, &self.nats);
        counts.record(ELBS, &self.elbs);
        counts.record(RDS_CLUSTERS, &self.rds_clusters);
        counts.record(RDS_INSTANCES, &self.rds_instances);
        counts.record(EBS_VOLUMES, &self.ebs_volumes);
        counts.record(S3S, &self.s3s);
        counts.record(ROUTE53S, &self.route53s);
        counts
    }

    /// The ordered action list of the last reconciliation
    pub fn plan(&self) -> Plan {
        let mut actions = Vec::new();
        actions.extend(Action::for_resources(VPCS, &self.vpcs));
        actions.extend(Action::for_resources(NETWORKS, &self.networks));
        actions.extend(Action::for_resources(INSTANCES, &self.instances));
        actions.extend(Action::for_resources(FIREWALLS, &self.firewalls));
        actions.extend(Action::for_resources(NATS, &self.nats));
        actions.extend(Action::for_resources(ELBS, &self.elbs));
        actions.extend(Action::for_resources(RDS_CLUSTERS, &self.rds_clusters));
        actions.extend(Action::for_resources(RDS_INSTANCES, &self.rds_instances));
        actions.extend(Action::for_resources(EBS_VOLUMES, &self.ebs_volumes));
        actions.extend(Action::for_resources(S3S, &self.s3s));
        actions.extend(Action::for_resources(ROUTE53S, &self.route53s));
        Plan::new(actions)
    }
}
