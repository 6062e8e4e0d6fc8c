use super::ProviderContext;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The service VPC, either existing (`vpc_id` given) or created from a subnet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vpc {
    pub name: String,
    pub vpc_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_subnet: Option<String>,

    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub status: Status,
}

component!(Vpc, vpc_id);

impl Reconcilable for Vpc {
    fn has_changed(&self, previous: &Self) -> bool {
        self.vpc_subnet != previous.vpc_subnet
    }

    fn inherit(&mut self, previous: &Self) {
        if self.vpc_id.is_empty() {
            self.vpc_id = previous.vpc_id.clone();
        }
        self.status = previous.status;
    }

    component_status!();
}
