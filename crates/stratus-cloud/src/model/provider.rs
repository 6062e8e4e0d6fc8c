use super::{DATACENTERS, VPCS};
use crate::deferred::Deferred;
use serde::{Deserialize, Serialize};

/// Datacenter fields every component carries for the provider connector.
///
/// Filled with references to the singleton datacenter entry rather than
/// literal credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderContext {
    #[serde(rename = "_type")]
    pub provider_type: Deferred,
    pub datacenter_name: Deferred,
    pub datacenter_region: Deferred,
    pub aws_access_key_id: Deferred,
    pub aws_secret_access_key: Deferred,
}

impl ProviderContext {
    pub fn deferred() -> Self {
        Self {
            provider_type: Deferred::first(DATACENTERS, "type"),
            datacenter_name: Deferred::first(DATACENTERS, "name"),
            datacenter_region: Deferred::first(DATACENTERS, "region"),
            aws_access_key_id: Deferred::first(DATACENTERS, "aws_access_key_id"),
            aws_secret_access_key: Deferred::first(DATACENTERS, "aws_secret_access_key"),
        }
    }
}

/// `$(vpcs.items.0.vpc_id)`
pub fn vpc_reference() -> Deferred {
    Deferred::first(VPCS, "vpc_id")
}
