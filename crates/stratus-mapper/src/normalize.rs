//! Normalisation of imported provisioning models
//!
//! A model built by importing live infrastructure only carries what the
//! provider reported: provider ids instead of component names, and literal
//! datacenter values. Before it can be reverse mapped, the name lists are
//! rebuilt from the ids and the datacenter/VPC fields are turned back into
//! references.

use stratus_cloud::component::{Component, TAG_INSTANCE_GROUP, names_from_ids, resolve};
use stratus_cloud::{Deferred, ProviderContext, ProvisioningModel, vpc_reference};

/// Replace `names` with the names resolved from `ids`, when any resolve
fn rebuild<C: Component>(names: &mut Vec<String>, items: &[C], ids: &[Deferred]) {
    let resolved = names_from_ids(items, ids);
    if !resolved.is_empty() {
        *names = resolved;
    }
}

fn rebuild_one<C: Component>(name: &mut String, items: &[C], id: &Deferred) {
    if let Some(component) = resolve(items, id) {
        *name = component.component_name().to_string();
    }
}

pub fn normalize_import(model: &mut ProvisioningModel) {
    let prefix = model.prefix();
    let networks = &model.networks.items;
    let firewalls = &model.firewalls.items;
    let volumes = &model.ebs_volumes.items;

    for instance in &mut model.instances.items {
        rebuild_one(&mut instance.network_name, networks, &instance.network_aws_id);
        rebuild(
            &mut instance.security_groups,
            firewalls,
            &instance.security_group_aws_ids,
        );
        for volume in &mut instance.volumes {
            rebuild_one(&mut volume.volume, volumes, &volume.volume_aws_id);
        }
        instance.provider = ProviderContext::deferred();
        instance.vpc_id = vpc_reference();
    }

    let instances = &model.instances.items;
    for elb in &mut model.elbs.items {
        rebuild(&mut elb.networks, networks, &elb.network_aws_ids);
        rebuild(&mut elb.security_groups, firewalls, &elb.security_group_aws_ids);
        rebuild(&mut elb.instance_names, instances, &elb.instance_aws_ids);

        let mut groups: Vec<String> = Vec::new();
        for name in &elb.instance_names {
            let group = instances
                .iter()
                .find(|i| &i.name == name)
                .and_then(|i| i.tag(TAG_INSTANCE_GROUP));
            if let Some(group) = group {
                let group = format!("{}{}", prefix, group);
                if !groups.contains(&group) {
                    groups.push(group);
                }
            }
        }
        if !groups.is_empty() {
            elb.instances = groups;
        }

        elb.provider = ProviderContext::deferred();
        elb.vpc_id = vpc_reference();
    }

    for nat in &mut model.nats.items {
        rebuild_one(&mut nat.public_network, networks, &nat.public_network_aws_id);
        rebuild(&mut nat.routed_networks, networks, &nat.routed_networks_aws_ids);
        nat.provider = ProviderContext::deferred();
        nat.vpc_id = vpc_reference();
    }

    for cluster in &mut model.rds_clusters.items {
        rebuild(&mut cluster.networks, networks, &cluster.network_aws_ids);
        rebuild(&mut cluster.security_groups, firewalls, &cluster.security_group_aws_ids);
        cluster.provider = ProviderContext::deferred();
        cluster.vpc_id = vpc_reference();
    }

    for instance in &mut model.rds_instances.items {
        rebuild(&mut instance.networks, networks, &instance.network_aws_ids);
        rebuild(&mut instance.security_groups, firewalls, &instance.security_group_aws_ids);
        instance.provider = ProviderContext::deferred();
        instance.vpc_id = vpc_reference();
    }

    for vpc in &mut model.vpcs.items {
        vpc.provider = ProviderContext::deferred();
    }
    for network in &mut model.networks.items {
        network.provider = ProviderContext::deferred();
        network.vpc_id = vpc_reference();
    }
    for firewall in &mut model.firewalls.items {
        firewall.provider = ProviderContext::deferred();
        firewall.vpc_id = vpc_reference();
    }
    for volume in &mut model.ebs_volumes.items {
        volume.provider = ProviderContext::deferred();
        volume.vpc_id = vpc_reference();
    }
    for bucket in &mut model.s3s.items {
        bucket.provider = ProviderContext::deferred();
    }
    for zone in &mut model.route53s.items {
        zone.provider = ProviderContext::deferred();
        zone.vpc_id = vpc_reference();
    }

    tracing::debug!(service = %model.name, "normalized imported model");
}
