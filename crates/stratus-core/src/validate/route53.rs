use super::ValidationResult;
use crate::model::{Definition, Record, Route53Zone};

pub const DNS_TYPES: [&str; 11] = [
    "A", "AAAA", "CNAME", "MX", "PTR", "TXT", "SRV", "SPF", "NAPTR", "NS", "SOA",
];

impl Route53Zone {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        ensure!(
            !self.name.is_empty(),
            "Route53 zone name should not be null"
        );

        for record in &self.records {
            record.validate(def)?;
        }

        Ok(())
    }
}

impl Record {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        ensure!(
            !self.entry.is_empty(),
            "Route53 record entry name should not be null"
        );
        ensure!(
            DNS_TYPES.contains(&self.record_type.as_str()),
            "Route53 record type '{}' is not a valid dns type. Please use one of [{}]",
            self.record_type,
            DNS_TYPES.join(", ")
        );

        let targets = [
            !self.loadbalancers.is_empty(),
            !self.instances.is_empty(),
            !self.rds_instances.is_empty(),
            !self.rds_clusters.is_empty(),
        ];
        let target_kinds = targets.iter().filter(|set| **set).count();

        ensure!(
            target_kinds > 0 || !self.values.is_empty(),
            "Route53 record must specify a valid target [rds_instances, rds_clusters, instances or loadbalancers] or value"
        );
        ensure!(
            target_kinds <= 1,
            "Route53 record must specify only one of either rds_instances, rds_clusters, instances or loadbalancers as targets"
        );

        self.validate_target_types()?;
        self.validate_target_references(def)?;

        ensure!(self.ttl > 0, "Route53 record TTL must be greater than 0");

        Ok(())
    }

    fn validate_target_types(&self) -> ValidationResult {
        let cname_targets = [
            (&self.loadbalancers, "loadbalancers"),
            (&self.rds_instances, "rds_instances"),
            (&self.rds_clusters, "rds_clusters"),
        ];

        for (targets, kind) in cname_targets {
            ensure!(
                targets.is_empty() || self.record_type == "CNAME",
                "Route53 record type must be CNAME when using {} as a target",
                kind
            );
        }

        ensure!(
            self.instances.is_empty() || self.record_type == "A",
            "Route53 record type must be A when using instances as a target"
        );

        Ok(())
    }

    fn validate_target_references(&self, def: &Definition) -> ValidationResult {
        for name in &self.instances {
            ensure!(
                def.find_instance(name).is_some(),
                "Route53 record instance '{}' does not exist",
                name
            );
        }
        for name in &self.loadbalancers {
            ensure!(
                def.find_elb(name).is_some(),
                "Route53 record loadbalancer '{}' does not exist",
                name
            );
        }
        for name in &self.rds_instances {
            ensure!(
                def.find_rds_instance(name).is_some(),
                "Route53 record rds instance '{}' does not exist",
                name
            );
        }
        for name in &self.rds_clusters {
            ensure!(
                def.find_rds_cluster(name).is_some(),
                "Route53 record rds cluster '{}' does not exist",
                name
            );
        }
        Ok(())
    }
}
