use crate::names::Names;
use stratus_cloud::component::{TAG_VOLUME_GROUP, filter_by_tag, tag_values};
use stratus_cloud::{EbsVolume, ProviderContext, ProvisioningModel, vpc_reference};
use stratus_core::model as definition;

/// Expand every volume group into `count` volumes
pub(crate) fn map(def: &definition::Definition, names: &Names) -> Vec<EbsVolume> {
    let mut volumes = Vec::new();

    for group in &def.ebs_volumes {
        for number in 1..=group.count {
            let name = names.member(&group.name, number);
            volumes.push(EbsVolume {
                volume_type: group.volume_type.clone(),
                size: group.size,
                iops: group.iops,
                availability_zone: group.availability_zone.clone(),
                encrypted: group.encrypted,
                encryption_key_id: group.encryption_key_id.clone(),
                tags: names.group_tags(&name, TAG_VOLUME_GROUP, &group.name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            });
        }
    }

    volumes
}

pub(crate) fn unmap(model: &ProvisioningModel) -> Vec<definition::EbsVolume> {
    let items = &model.ebs_volumes.items;

    tag_values(items, TAG_VOLUME_GROUP)
        .into_iter()
        .filter_map(|group| {
            let members = filter_by_tag(items, TAG_VOLUME_GROUP, &group);
            let first = members.first()?;
            Some(definition::EbsVolume {
                volume_type: first.volume_type.clone(),
                size: first.size,
                iops: first.iops,
                count: u32::try_from(members.len()).unwrap_or(u32::MAX),
                encrypted: first.encrypted,
                encryption_key_id: first.encryption_key_id.clone(),
                availability_zone: first.availability_zone.clone(),
                name: group,
            })
        })
        .collect()
}
