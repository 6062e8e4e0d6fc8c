use crate::names::Names;
use stratus_cloud::{Network, ProviderContext, ProvisioningModel, vpc_reference};
use stratus_core::model as definition;

pub(crate) fn map(def: &definition::Definition, names: &Names) -> Vec<Network> {
    def.networks
        .iter()
        .map(|network| {
            let name = names.full(&network.name);
            Network {
                subnet: network.subnet.clone(),
                is_public: network.public,
                availability_zone: network.availability_zone.clone(),
                tags: names.tags(&name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            }
        })
        .collect()
}

/// Networks routed through a NAT gateway get it back from the NAT component
pub(crate) fn unmap(model: &ProvisioningModel, names: &Names) -> Vec<definition::Network> {
    model
        .networks
        .items
        .iter()
        .map(|network| {
            let nat_gateway = model
                .nats
                .items
                .iter()
                .find(|nat| nat.routed_networks.contains(&network.name))
                .map(|nat| names.short(&nat.name).to_string());

            definition::Network {
                name: names.short(&network.name).to_string(),
                subnet: network.subnet.clone(),
                public: network.is_public,
                nat_gateway,
                availability_zone: network.availability_zone.clone(),
            }
        })
        .collect()
}
