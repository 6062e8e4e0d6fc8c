use crate::names::Names;
use stratus_cloud::{
    Elb, ElbListener, FIREWALLS, INSTANCES, NETWORKS, ProviderContext, ProvisioningModel,
    vpc_reference,
};
use stratus_core::model as definition;

pub(crate) fn map(def: &definition::Definition, names: &Names) -> Vec<Elb> {
    def.elbs
        .iter()
        .map(|elb| {
            let name = names.full(&elb.name);
            let networks = names.full_all(&elb.networks);
            let security_groups = names.full_all(&elb.security_groups);

            // every concrete member of every attached instance group
            let instance_names: Vec<String> = elb
                .instances
                .iter()
                .filter_map(|group| def.find_instance(group))
                .flat_map(|group| (1..=group.count).map(|i| names.member(&group.name, i)))
                .collect();

            let listeners = elb
                .listeners
                .iter()
                .map(|l| ElbListener {
                    from_port: l.from_port,
                    to_port: l.to_port,
                    protocol: l.protocol.to_uppercase(),
                    ssl_cert: l.ssl_cert.clone(),
                })
                .collect();

            Elb {
                is_private: elb.private,
                listeners,
                network_aws_ids: names.references(NETWORKS, &networks, "network_aws_id"),
                networks,
                instances: names.full_all(&elb.instances),
                instance_aws_ids: names.references(INSTANCES, &instance_names, "instance_aws_id"),
                instance_names,
                security_group_aws_ids: names.references(
                    FIREWALLS,
                    &security_groups,
                    "security_group_aws_id",
                ),
                security_groups,
                tags: names.tags(&name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            }
        })
        .collect()
}

pub(crate) fn unmap(model: &ProvisioningModel, names: &Names) -> Vec<definition::Elb> {
    model
        .elbs
        .items
        .iter()
        .map(|elb| definition::Elb {
            name: names.short(&elb.name).to_string(),
            private: elb.is_private,
            networks: names.short_all(&elb.networks),
            instances: names.short_all(&elb.instances),
            security_groups: names.short_all(&elb.security_groups),
            listeners: elb
                .listeners
                .iter()
                .map(|l| definition::ElbListener {
                    from_port: l.from_port,
                    to_port: l.to_port,
                    protocol: l.protocol.to_lowercase(),
                    ssl_cert: l.ssl_cert.clone(),
                })
                .collect(),
        })
        .collect()
}
