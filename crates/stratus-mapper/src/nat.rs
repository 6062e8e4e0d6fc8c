use crate::names::Names;
use stratus_cloud::component::TAG_NAT_GATEWAY;
use stratus_cloud::{Deferred, NETWORKS, Nat, ProviderContext, ProvisioningModel, vpc_reference};
use stratus_core::model as definition;

/// One NAT component per gateway, routing every private network that names it
pub(crate) fn map(def: &definition::Definition, names: &Names) -> Vec<Nat> {
    def.nat_gateways
        .iter()
        .map(|gateway| {
            let name = names.full(&gateway.name);
            let public_network = names.full(&gateway.public_network);
            let routed_networks: Vec<String> = def
                .networks
                .iter()
                .filter(|n| n.nat_gateway.as_deref() == Some(gateway.name.as_str()))
                .map(|n| names.full(&n.name))
                .collect();

            Nat {
                public_network_aws_id: Deferred::by_name(
                    NETWORKS,
                    &public_network,
                    "network_aws_id",
                ),
                public_network,
                routed_networks_aws_ids: names.references(
                    NETWORKS,
                    &routed_networks,
                    "network_aws_id",
                ),
                routed_networks,
                tags: names.group_tags(&name, TAG_NAT_GATEWAY, &gateway.name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            }
        })
        .collect()
}

pub(crate) fn unmap(model: &ProvisioningModel, names: &Names) -> Vec<definition::NatGateway> {
    model
        .nats
        .items
        .iter()
        .map(|nat| definition::NatGateway {
            name: names.short(&nat.name).to_string(),
            public_network: names.short(&nat.public_network).to_string(),
        })
        .collect()
}
