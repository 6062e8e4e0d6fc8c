use crate::names::Names;
use stratus_cloud::{Datacenter, ProviderContext, Vpc};
use stratus_core::model as definition;

pub(crate) fn map_datacenter(datacenter: &definition::Datacenter) -> Datacenter {
    Datacenter {
        name: datacenter.name.clone(),
        provider_type: datacenter.provider_type.clone(),
        region: datacenter.region.clone(),
        aws_access_key_id: datacenter.aws_access_key_id.clone(),
        aws_secret_access_key: datacenter.aws_secret_access_key.clone(),
    }
}

pub(crate) fn unmap_datacenter(datacenter: &Datacenter) -> definition::Datacenter {
    definition::Datacenter {
        name: datacenter.name.clone(),
        provider_type: datacenter.provider_type.clone(),
        region: datacenter.region.clone(),
        aws_access_key_id: datacenter.aws_access_key_id.clone(),
        aws_secret_access_key: datacenter.aws_secret_access_key.clone(),
    }
}

/// The singleton VPC entry; an existing VPC keeps its id as a literal
pub(crate) fn map_vpc(def: &definition::Definition, names: &Names) -> Vpc {
    let name = names.full("vpc");
    Vpc {
        vpc_id: def.vpc_id.clone().unwrap_or_default(),
        vpc_subnet: def.vpc_subnet.clone(),
        tags: names.tags(&name),
        provider: ProviderContext::deferred(),
        name,
        ..Default::default()
    }
}
