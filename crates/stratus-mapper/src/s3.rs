use crate::names::Names;
use stratus_cloud::{ProviderContext, ProvisioningModel, S3Bucket, S3Grantee};
use stratus_core::model as definition;

pub(crate) fn map(def: &definition::Definition, names: &Names) -> Vec<S3Bucket> {
    def.s3_buckets
        .iter()
        .map(|bucket| {
            let name = names.full(&bucket.name);
            S3Bucket {
                acl: bucket.acl.clone(),
                bucket_location: bucket.bucket_location.clone(),
                grantees: bucket
                    .grantees
                    .iter()
                    .map(|g| S3Grantee {
                        id: g.id.clone(),
                        grantee_type: g.grantee_type.clone(),
                        permissions: g.permissions.to_uppercase(),
                    })
                    .collect(),
                tags: names.tags(&name),
                provider: ProviderContext::deferred(),
                name,
                ..Default::default()
            }
        })
        .collect()
}

pub(crate) fn unmap(model: &ProvisioningModel, names: &Names) -> Vec<definition::S3Bucket> {
    model
        .s3s
        .items
        .iter()
        .map(|bucket| definition::S3Bucket {
            name: names.short(&bucket.name).to_string(),
            acl: bucket.acl.clone(),
            bucket_location: bucket.bucket_location.clone(),
            grantees: bucket
                .grantees
                .iter()
                .map(|g| definition::S3Grantee {
                    id: g.id.clone(),
                    grantee_type: g.grantee_type.to_lowercase(),
                    permissions: g.permissions.to_lowercase(),
                })
                .collect(),
        })
        .collect()
}
