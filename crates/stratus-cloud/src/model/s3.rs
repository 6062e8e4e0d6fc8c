use super::ProviderContext;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An S3 bucket; buckets live outside the VPC
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Bucket {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,

    pub bucket_location: String,
    pub bucket_uri: String,
    pub grantees: Vec<S3Grantee>,
    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Grantee {
    pub id: String,

    #[serde(rename = "type")]
    pub grantee_type: String,

    /// Upper-cased, e.g. `FULL_CONTROL`
    pub permissions: String,
}

component!(S3Bucket, bucket_uri);

impl Reconcilable for S3Bucket {
    fn has_changed(&self, _previous: &Self) -> bool {
        false
    }

    fn inherit(&mut self, previous: &Self) {
        self.bucket_uri = previous.bucket_uri.clone();
        self.status = previous.status;
    }

    component_status!();
}
