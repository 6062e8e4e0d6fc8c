use crate::names::Names;
use stratus_cloud::{
    FIREWALLS, NETWORKS, ProviderContext, ProvisioningModel, RdsCluster, RdsInstance,
    vpc_reference,
};
use stratus_core::model as definition;

pub(crate) fn map_clusters(def: &definition::Definition, names: &Names) -> Vec<RdsCluster> {
    def.rds_clusters
        .iter()
        .map(|cluster| {
            let name = names.full(&cluster.name);
            let networks = names.full_all(&cluster.networks);
            let security_groups = names.full_all(&cluster.security_groups);

            RdsCluster {
                engine: cluster.engine.clone(),
                engine_version: cluster.engine_version.clone(),
                port: cluster.port,
                availability_zones: cluster.availability_zones.clone(),
                security_group_aws_ids: names.references(
                    FIREWALLS,
                    &security_groups,
                    "security_group_aws_id",
                ),
                security_groups,
                network_aws_ids: names.references(NETWORKS, &networks, "network_aws_id"),
                networks,
                database_name: cluster.database_name.clone(),
                database_username: cluster.database_username.clone(),
                database_password: cluster.database_password.clone(),
                backup_retention: cluster.backups.retention,
                backup_window: cluster.backups.window.clone(),
                maintenance_window: cluster.maintenance_window.clone(),
                replication_source: cluster.replication_source.clone(),
                final_snapshot: cluster.final_snapshot,
                tags: names.tags(&name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            }
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Instances joining a cluster take engine, credentials and port from it
pub(crate) fn map_instances(def: &definition::Definition, names: &Names) -> Vec<RdsInstance> {
    def.rds_instances
        .iter()
        .map(|instance| {
            let name = names.full(&instance.name);
            let networks = names.full_all(&instance.networks);
            let security_groups = names.full_all(&instance.security_groups);

            let mut mapped = RdsInstance {
                size: instance.size.clone(),
                engine: instance.engine.clone(),
                engine_version: instance.engine_version.clone(),
                port: instance.port,
                cluster: instance.cluster.as_deref().map(|c| names.full(c)),
                public: instance.public,
                multi_az: instance.multi_az,
                promotion_tier: instance.promotion_tier,
                storage_type: instance.storage.storage_type.clone(),
                storage_size: instance.storage.size,
                storage_iops: instance.storage.iops,
                availability_zone: instance.availability_zone.clone(),
                security_group_aws_ids: names.references(
                    FIREWALLS,
                    &security_groups,
                    "security_group_aws_id",
                ),
                security_groups,
                network_aws_ids: names.references(NETWORKS, &networks, "network_aws_id"),
                networks,
                database_name: instance.database_name.clone(),
                database_username: instance.database_username.clone(),
                database_password: instance.database_password.clone(),
                auto_upgrade: instance.auto_upgrade,
                backup_retention: instance.backups.retention,
                backup_window: instance.backups.window.clone(),
                maintenance_window: instance.maintenance_window.clone(),
                final_snapshot: instance.final_snapshot,
                replication_source: instance.replication_source.clone(),
                license: instance.license.clone(),
                timezone: instance.timezone.clone(),
                tags: names.tags(&name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            };

            if let Some(cluster) = instance
                .cluster
                .as_deref()
                .and_then(|c| def.find_rds_cluster(c))
            {
                mapped.engine = non_empty(&cluster.engine);
                mapped.engine_version = cluster.engine_version.clone();
                mapped.port = cluster.port;
                mapped.database_name = non_empty(&cluster.database_name);
                mapped.database_username = non_empty(&cluster.database_username);
                mapped.database_password = non_empty(&cluster.database_password);
            }

            mapped
        })
        .collect()
}

pub(crate) fn unmap_clusters(
    model: &ProvisioningModel,
    names: &Names,
) -> Vec<definition::RdsCluster> {
    model
        .rds_clusters
        .items
        .iter()
        .map(|cluster| definition::RdsCluster {
            name: names.short(&cluster.name).to_string(),
            engine: cluster.engine.clone(),
            engine_version: cluster.engine_version.clone(),
            port: cluster.port,
            availability_zones: cluster.availability_zones.clone(),
            security_groups: names.short_all(&cluster.security_groups),
            networks: names.short_all(&cluster.networks),
            database_name: cluster.database_name.clone(),
            database_username: cluster.database_username.clone(),
            database_password: cluster.database_password.clone(),
            backups: definition::RdsBackup {
                window: cluster.backup_window.clone(),
                retention: cluster.backup_retention,
            },
            maintenance_window: cluster.maintenance_window.clone(),
            replication_source: cluster.replication_source.clone(),
            final_snapshot: cluster.final_snapshot,
        })
        .collect()
}

/// Inherited cluster attributes are dropped again, they live on the cluster
pub(crate) fn unmap_instances(
    model: &ProvisioningModel,
    names: &Names,
) -> Vec<definition::RdsInstance> {
    model
        .rds_instances
        .items
        .iter()
        .map(|instance| {
            let mut unmapped = definition::RdsInstance {
                name: names.short(&instance.name).to_string(),
                size: instance.size.clone(),
                engine: instance.engine.clone(),
                engine_version: instance.engine_version.clone(),
                port: instance.port,
                cluster: instance.cluster.as_deref().map(|c| names.short(c).to_string()),
                public: instance.public,
                multi_az: instance.multi_az,
                promotion_tier: instance.promotion_tier,
                storage: definition::RdsStorage {
                    storage_type: instance.storage_type.clone(),
                    size: instance.storage_size,
                    iops: instance.storage_iops,
                },
                availability_zone: instance.availability_zone.clone(),
                security_groups: names.short_all(&instance.security_groups),
                networks: names.short_all(&instance.networks),
                database_name: instance.database_name.clone(),
                database_username: instance.database_username.clone(),
                database_password: instance.database_password.clone(),
                auto_upgrade: instance.auto_upgrade,
                backups: definition::RdsBackup {
                    window: instance.backup_window.clone(),
                    retention: instance.backup_retention,
                },
                maintenance_window: instance.maintenance_window.clone(),
                final_snapshot: instance.final_snapshot,
                replication_source: instance.replication_source.clone(),
                license: instance.license.clone(),
                timezone: instance.timezone.clone(),
            };

            if unmapped.cluster.is_some() {
                unmapped.engine = None;
                unmapped.engine_version = None;
                unmapped.port = None;
                unmapped.database_name = None;
                unmapped.database_username = None;
                unmapped.database_password = None;
            }

            unmapped
        })
        .collect()
}
