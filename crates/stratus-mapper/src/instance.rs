use crate::error::{MapperError, Result};
use crate::names::Names;
use stratus_cloud::component::{
    TAG_INSTANCE_GROUP, TAG_VOLUME_GROUP, filter_by_tag, find_by_name, resolve, tag_values,
};
use stratus_cloud::{
    Deferred, EBS_VOLUMES, FIREWALLS, Instance, InstanceVolume, NETWORKS, ProviderContext,
    ProvisioningModel, vpc_reference,
};
use stratus_core::model as definition;

/// Expand every instance group into `count` concrete instances
pub(crate) fn map(def: &definition::Definition, names: &Names) -> Vec<Instance> {
    let mut instances = Vec::new();

    for group in &def.instances {
        let network = names.full(&group.network);
        let security_groups = names.full_all(&group.security_groups);

        for index in 0..group.count {
            let number = index + 1;
            let name = names.member(&group.name, number);

            let volumes = group
                .volumes
                .iter()
                .map(|v| {
                    let volume = names.member(&v.volume, number);
                    InstanceVolume {
                        volume_aws_id: Deferred::by_name(EBS_VOLUMES, &volume, "volume_aws_id"),
                        volume,
                        device: v.device.clone(),
                    }
                })
                .collect();

            instances.push(Instance {
                instance_type: group.instance_type.clone(),
                image: group.image.clone(),
                ip: group.address(index),
                network_name: network.clone(),
                network_aws_id: Deferred::by_name(NETWORKS, &network, "network_aws_id"),
                key_pair: group.key_pair.clone(),
                assign_elastic_ip: group.elastic_ip,
                user_data: group.user_data.clone(),
                security_group_aws_ids: names.references(
                    FIREWALLS,
                    &security_groups,
                    "security_group_aws_id",
                ),
                security_groups: security_groups.clone(),
                volumes,
                tags: names.group_tags(&name, TAG_INSTANCE_GROUP, &group.name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            });
        }
    }

    instances
}

/// Collapse concrete instances back into their groups.
///
/// A group takes the attributes of its first member; its count is the
/// number of members carrying the group tag.
pub(crate) fn unmap(model: &ProvisioningModel, names: &Names) -> Result<Vec<definition::Instance>> {
    let mut groups = Vec::new();

    for group in tag_values(&model.instances.items, TAG_INSTANCE_GROUP) {
        let members = filter_by_tag(&model.instances.items, TAG_INSTANCE_GROUP, &group);
        let Some(first) = members.first() else {
            continue;
        };

        if first.network_name.is_empty() {
            return Err(MapperError::UnresolvedReference {
                kind: "Instance",
                name: first.name.clone(),
                target: "network",
            });
        }

        let volumes = first
            .volumes
            .iter()
            .filter_map(|v| {
                let ebs = resolve(&model.ebs_volumes.items, &v.volume_aws_id)
                    .or_else(|| find_by_name(&model.ebs_volumes.items, &v.volume))?;
                let volume = ebs.tags.get(TAG_VOLUME_GROUP)?;
                Some(definition::InstanceVolume {
                    volume: volume.clone(),
                    device: v.device.clone(),
                })
            })
            .collect();

        groups.push(definition::Instance {
            name: group.clone(),
            instance_type: first.instance_type.clone(),
            image: first.image.clone(),
            count: u32::try_from(members.len()).unwrap_or(u32::MAX),
            network: names.short(&first.network_name).to_string(),
            start_ip: first.ip,
            key_pair: first.key_pair.clone(),
            elastic_ip: first.assign_elastic_ip,
            user_data: first.user_data.clone(),
            security_groups: names.short_all(&first.security_groups),
            volumes,
        });
    }

    Ok(groups)
}
