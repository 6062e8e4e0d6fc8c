use super::ProviderContext;
use crate::deferred::Deferred;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A NAT gateway and the private networks routed through it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nat {
    pub name: String,
    pub public_network: String,
    pub public_network_aws_id: Deferred,
    pub routed_networks: Vec<String>,
    pub routed_networks_aws_ids: Vec<Deferred>,

    pub nat_gateway_aws_id: String,
    pub nat_gateway_allocation_id: String,
    pub nat_gateway_allocation_ip: String,

    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

component!(Nat, nat_gateway_aws_id);

impl Reconcilable for Nat {
    fn has_changed(&self, _previous: &Self) -> bool {
        false
    }

    fn inherit(&mut self, previous: &Self) {
        self.nat_gateway_aws_id = previous.nat_gateway_aws_id.clone();
        self.nat_gateway_allocation_id = previous.nat_gateway_allocation_id.clone();
        self.nat_gateway_allocation_ip = previous.nat_gateway_allocation_ip.clone();
        self.status = previous.status;
    }

    component_status!();
}
