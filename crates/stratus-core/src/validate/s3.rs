use super::{MAX_NAME_LENGTH, ValidationResult, name_fits};
use crate::model::S3Bucket;

pub const GRANTEE_TYPES: [&str; 4] = ["id", "emailaddress", "uri", "canonicaluser"];
pub const PERMISSION_TYPES: [&str; 5] = ["full_control", "write", "write_acp", "read", "read_acp"];
pub const ACL_TYPES: [&str; 6] = [
    "private",
    "public-read",
    "public-read-write",
    "aws-exec-read",
    "authenticated-read",
    "log-delivery-write",
];

impl S3Bucket {
    pub fn validate(&self) -> ValidationResult {
        ensure!(!self.name.is_empty(), "S3 bucket name should not be null");
        ensure!(
            name_fits(&self.name),
            "S3 bucket name can't be greater than {} characters",
            MAX_NAME_LENGTH
        );
        ensure!(
            !self.bucket_location.is_empty(),
            "S3 bucket location should not be null"
        );

        let acl = self.acl.as_deref().filter(|a| !a.is_empty());

        ensure!(
            acl.is_none() || self.grantees.is_empty(),
            "S3 bucket must specify either acl or grantees, not both"
        );

        if let Some(acl) = acl {
            ensure!(
                ACL_TYPES.contains(&acl),
                "S3 bucket ACL ({}) is not valid. Must be one of [{}]",
                acl,
                ACL_TYPES.join(" | ")
            );
        }

        for g in &self.grantees {
            ensure!(
                GRANTEE_TYPES.contains(&g.grantee_type.as_str()),
                "S3 grantee type ({}) is invalid",
                g.grantee_type
            );
            ensure!(!g.id.is_empty(), "S3 grantee id should not be null");
            ensure!(
                PERMISSION_TYPES.contains(&g.permissions.as_str()),
                "S3 grantee permissions ({}) is not valid. Must be one of [{}]",
                g.permissions,
                PERMISSION_TYPES.join(" | ")
            );
        }

        Ok(())
    }
}
