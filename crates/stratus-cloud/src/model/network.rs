use super::ProviderContext;
use crate::deferred::Deferred;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub name: String,
    pub subnet: String,
    pub is_public: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    pub network_aws_id: String,
    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

component!(Network, network_aws_id);

impl Reconcilable for Network {
    /// Subnets cannot be modified in place
    fn has_changed(&self, _previous: &Self) -> bool {
        false
    }

    fn inherit(&mut self, previous: &Self) {
        self.network_aws_id = previous.network_aws_id.clone();
        self.status = previous.status;
    }

    component_status!();
}
