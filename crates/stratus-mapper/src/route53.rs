use crate::names::Names;
use stratus_cloud::component::{TAG_INSTANCE_GROUP, find_by_name, find_by_provider_id};
use stratus_cloud::{
    Deferred, ELBS, INSTANCES, ProviderContext, ProvisioningModel, RDS_CLUSTERS, RDS_INSTANCES,
    Record, Route53Zone, vpc_reference,
};
use stratus_core::model as definition;

pub(crate) fn map(def: &definition::Definition, names: &Names) -> Vec<Route53Zone> {
    def.route53_zones
        .iter()
        .map(|zone| {
            let name = names.full(&zone.name);
            Route53Zone {
                domain: zone.name.clone(),
                private: zone.private,
                records: zone
                    .records
                    .iter()
                    .map(|r| map_record(r, zone.private, def, names))
                    .collect(),
                tags: names.tags(&name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            }
        })
        .collect()
}

/// Record targets become references to the address of the target
fn map_record(
    record: &definition::Record,
    private: bool,
    def: &definition::Definition,
    names: &Names,
) -> Record {
    // private zones resolve to the private address
    let address = if private { "ip" } else { "public_ip" };

    let mut values: Vec<Deferred> = record
        .values
        .iter()
        .map(|v| Deferred::literal(v.as_str()))
        .collect();

    for group in record.instances.iter().filter_map(|g| def.find_instance(g)) {
        values.extend(
            (1..=group.count)
                .map(|i| Deferred::by_name(INSTANCES, &names.member(&group.name, i), address)),
        );
    }
    values.extend(names.references(
        ELBS,
        &names.full_all(&record.loadbalancers),
        "dns_name",
    ));
    values.extend(names.references(
        RDS_INSTANCES,
        &names.full_all(&record.rds_instances),
        "endpoint",
    ));
    values.extend(names.references(
        RDS_CLUSTERS,
        &names.full_all(&record.rds_clusters),
        "endpoint",
    ));

    Record {
        entry: record.entry.clone(),
        record_type: record.record_type.clone(),
        values,
        ttl: record.ttl,
    }
}

pub(crate) fn unmap(model: &ProvisioningModel, names: &Names) -> Vec<definition::Route53Zone> {
    model
        .route53s
        .items
        .iter()
        .map(|zone| definition::Route53Zone {
            name: if zone.domain.is_empty() {
                names.short(&zone.name).to_string()
            } else {
                zone.domain.clone()
            },
            private: zone.private,
            records: zone.records.iter().map(|r| unmap_record(r, model, names)).collect(),
        })
        .collect()
}

/// What a record value points at
enum Target {
    Instance(String),
    Elb(String),
    RdsInstance(String),
    RdsCluster(String),
}

fn unmap_record(record: &Record, model: &ProvisioningModel, names: &Names) -> definition::Record {
    let mut unmapped = definition::Record {
        entry: record.entry.clone(),
        record_type: record.record_type.clone(),
        ttl: record.ttl,
        ..Default::default()
    };

    for value in &record.values {
        match target(value, model) {
            Some(Target::Instance(group)) => push_unique(&mut unmapped.instances, group),
            Some(Target::Elb(name)) => {
                push_unique(&mut unmapped.loadbalancers, names.short(&name).to_string())
            }
            Some(Target::RdsInstance(name)) => {
                push_unique(&mut unmapped.rds_instances, names.short(&name).to_string())
            }
            Some(Target::RdsCluster(name)) => {
                push_unique(&mut unmapped.rds_clusters, names.short(&name).to_string())
            }
            None => unmapped.values.push(value.to_string()),
        }
    }

    unmapped
}

/// Identify the component behind a record value, by reference or by the
/// provider id it was imported with
fn target(value: &Deferred, model: &ProvisioningModel) -> Option<Target> {
    let instance_group = |instance: &stratus_cloud::Instance| {
        instance
            .tags
            .get(TAG_INSTANCE_GROUP)
            .map(|g| Target::Instance(g.clone()))
    };

    match value {
        Deferred::Reference(reference) => {
            let name = reference.name()?;
            match reference.collection.as_str() {
                INSTANCES => find_by_name(&model.instances.items, name).and_then(instance_group),
                ELBS => Some(Target::Elb(name.to_string())),
                RDS_INSTANCES => Some(Target::RdsInstance(name.to_string())),
                RDS_CLUSTERS => Some(Target::RdsCluster(name.to_string())),
                _ => None,
            }
        }
        // imported records carry provider ids; anything else is an authored value
        Deferred::Literal(id) => {
            if let Some(instance) = find_by_provider_id(&model.instances.items, id) {
                return instance_group(instance);
            }
            if let Some(elb) = find_by_provider_id(&model.elbs.items, id) {
                return Some(Target::Elb(elb.name.clone()));
            }
            if let Some(rds) = find_by_provider_id(&model.rds_instances.items, id) {
                return Some(Target::RdsInstance(rds.name.clone()));
            }
            find_by_provider_id(&model.rds_clusters.items, id)
                .map(|rds| Target::RdsCluster(rds.name.clone()))
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}
