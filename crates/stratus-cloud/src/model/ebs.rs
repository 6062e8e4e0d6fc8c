use super::ProviderContext;
use crate::deferred::Deferred;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One concrete volume of an EBS volume group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EbsVolume {
    pub name: String,
    pub volume_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i64>,

    pub availability_zone: String,
    pub encrypted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key_id: Option<String>,

    pub volume_aws_id: String,
    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

component!(EbsVolume, volume_aws_id);

impl Reconcilable for EbsVolume {
    fn has_changed(&self, _previous: &Self) -> bool {
        false
    }

    fn inherit(&mut self, previous: &Self) {
        self.volume_aws_id = previous.volume_aws_id.clone();
        self.status = previous.status;
    }

    component_status!();
}
