use super::ProviderContext;
use crate::deferred::Deferred;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A hosted zone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route53Zone {
    pub name: String,

    /// The zone's domain as authored
    pub domain: String,

    pub private: bool,
    pub records: Vec<Record>,
    pub hosted_zone_id: String,
    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub entry: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub values: Vec<Deferred>,
    pub ttl: i64,
}

component!(Route53Zone, hosted_zone_id);

impl Reconcilable for Route53Zone {
    fn has_changed(&self, _previous: &Self) -> bool {
        false
    }

    fn inherit(&mut self, previous: &Self) {
        self.hosted_zone_id = previous.hosted_zone_id.clone();
        self.status = previous.status;
    }

    component_status!();
}
