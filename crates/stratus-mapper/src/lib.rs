//! Stratus Mapper
//!
//! Translates between the authored [`Definition`] and the flat
//! [`ProvisioningModel`].
//!
//! - [`map`] expands a definition: instance and volume groups become one
//!   component per member, every component gets the
//!   `<datacenter>-<service>-` name prefix and cross references become
//!   [`Deferred`](stratus_cloud::Deferred) references. Mapping is
//!   deterministic.
//! - [`unmap`] is the inverse, used to rebuild an editable definition from
//!   an imported model (see [`normalize_import`]).

pub mod error;

mod datacenter;
mod ebs;
mod elb;
mod firewall;
mod instance;
mod names;
mod nat;
mod network;
mod normalize;
mod rds;
mod route53;
mod s3;

#[cfg(test)]
mod tests;

pub use error::{MapperError, Result};
pub use normalize::normalize_import;

use names::Names;
use stratus_cloud::{ProvisioningModel, Resources};
use stratus_core::{Datacenter, Definition, Payload};

/// Map a request payload, carrying the service id onto the model
pub fn map_payload(payload: &Payload) -> ProvisioningModel {
    let mut model = map(&payload.service, &payload.datacenter);
    model.id = payload.id.clone();
    model
}

/// Expand a definition into its provisioning model
pub fn map(def: &Definition, datacenter: &Datacenter) -> ProvisioningModel {
    let names = Names::new(&datacenter.name, &def.name);

    let model = ProvisioningModel {
        name: def.name.clone(),
        provider_type: datacenter.provider_type.clone(),
        datacenters: Resources {
            items: vec![datacenter::map_datacenter(datacenter)],
            ..Default::default()
        },
        vpcs: Resources::new(vec![datacenter::map_vpc(def, &names)]),
        networks: Resources::new(network::map(def, &names)),
        instances: Resources::new(instance::map(def, &names)),
        firewalls: Resources::new(firewall::map(def, &names)),
        nats: Resources::new(nat::map(def, &names)),
        elbs: Resources::new(elb::map(def, &names)),
        rds_clusters: Resources::new(rds::map_clusters(def, &names)),
        rds_instances: Resources::new(rds::map_instances(def, &names)),
        ebs_volumes: Resources::new(ebs::map(def, &names)),
        s3s: Resources::new(s3::map(def, &names)),
        route53s: Resources::new(route53::map(def, &names)),
        ..Default::default()
    };

    tracing::debug!(
        prefix = names.prefix(),
        networks = model.networks.items.len(),
        instances = model.instances.items.len(),
        "mapped definition"
    );

    model
}

/// Rebuild the definition a provisioning model was expanded from
pub fn unmap(model: &ProvisioningModel) -> Result<Definition> {
    let datacenter = model.datacenter().ok_or(MapperError::MissingDatacenter)?;
    let names = Names::new(&datacenter.name, &model.name);
    let vpc = model.vpcs.items.first();

    Ok(Definition {
        name: model.name.clone(),
        datacenter: datacenter.name.clone(),
        vpc_id: vpc
            .map(|v| v.vpc_id.clone())
            .filter(|id| !id.is_empty()),
        vpc_subnet: vpc.and_then(|v| v.vpc_subnet.clone()),
        networks: network::unmap(model, &names),
        instances: instance::unmap(model, &names)?,
        security_groups: firewall::unmap(model, &names),
        elbs: elb::unmap(model, &names),
        nat_gateways: nat::unmap(model, &names),
        rds_clusters: rds::unmap_clusters(model, &names),
        rds_instances: rds::unmap_instances(model, &names),
        ebs_volumes: ebs::unmap(model),
        s3_buckets: s3::unmap(model, &names),
        route53_zones: route53::unmap(model, &names),
    })
}

/// The datacenter entry of a model, as authored
pub fn unmap_datacenter(model: &ProvisioningModel) -> Result<Datacenter> {
    model
        .datacenter()
        .map(datacenter::unmap_datacenter)
        .ok_or(MapperError::MissingDatacenter)
}

/// Canonical YAML form of the definition behind a model
pub fn definition_yaml(model: &ProvisioningModel) -> Result<String> {
    let def = unmap(model)?;
    Ok(serde_yaml::to_string(&def)?)
}
