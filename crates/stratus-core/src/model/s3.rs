use serde::{Deserialize, Serialize};

/// An S3 bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Bucket {
    pub name: String,

    /// Canned ACL, exclusive with `grantees`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,

    pub bucket_location: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grantees: Vec<S3Grantee>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Grantee {
    pub id: String,

    #[serde(rename = "type")]
    pub grantee_type: String,

    pub permissions: String,
}
