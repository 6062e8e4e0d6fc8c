//! Definition validation
//!
//! [`validate_definition`] runs an ordered, short-circuit pipeline:
//! service name, datacenter, VPC, then every resource collection in
//! declaration order, then duplicate-name checks. Cross references are
//! always resolved by authored name, never by provider id.

use crate::error::ValidationError;
use crate::model::{Datacenter, Definition};
use ipnetwork::Ipv4Network;
use std::collections::HashSet;

/// Fail with a formatted message unless the condition holds
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::ValidationError::new(format!($($arg)+)));
        }
    };
}

/// Fail with a formatted message
macro_rules! fail {
    ($($arg:tt)+) => {
        return Err($crate::error::ValidationError::new(format!($($arg)+)))
    };
}

mod ebs;
mod elb;
mod instance;
mod nat;
mod network;
mod rds;
mod route53;
mod s3;
mod security_group;
mod window;

#[cfg(test)]
mod tests;

/// Longest name accepted for services, datacenters and most resources
pub const MAX_NAME_LENGTH: usize = 50;

pub type ValidationResult = std::result::Result<(), ValidationError>;

/// Validate a service definition, returning the first violation found
pub fn validate_definition(def: &Definition) -> ValidationResult {
    validate_name(&def.name)?;

    ensure!(!def.datacenter.is_empty(), "Datacenter not specified");

    validate_vpc(def)?;

    for n in &def.networks {
        n.validate(def)?;
    }

    for i in &def.instances {
        i.validate(def)?;
    }

    for sg in &def.security_groups {
        sg.validate(def)?;
    }

    for ng in &def.nat_gateways {
        ng.validate(def)?;
    }

    for c in &def.rds_clusters {
        c.validate(def)?;
    }

    for i in &def.rds_instances {
        i.validate(def)?;
    }

    for e in &def.elbs {
        e.validate(def)?;
    }

    for s in &def.s3_buckets {
        s.validate()?;
    }

    for z in &def.route53_zones {
        z.validate(def)?;
    }

    for v in &def.ebs_volumes {
        v.validate()?;
    }

    validate_unique_names(def)?;

    tracing::debug!(service = %def.name, "definition is valid");
    Ok(())
}

/// Validate the datacenter a definition is mapped against
pub fn validate_datacenter(dc: &Datacenter) -> ValidationResult {
    ensure!(!dc.name.is_empty(), "Datacenter name should not be null");
    ensure!(
        name_fits(&dc.name),
        "Datacenter name can't be greater than {} characters",
        MAX_NAME_LENGTH
    );
    Ok(())
}

fn validate_name(name: &str) -> ValidationResult {
    ensure!(!name.is_empty(), "Service name should not be null");
    ensure!(
        name_fits(name),
        "Service name can't be greater than {} characters",
        MAX_NAME_LENGTH
    );
    Ok(())
}

fn validate_vpc(def: &Definition) -> ValidationResult {
    let vpc_id = def.vpc_id.as_deref().filter(|id| !id.is_empty());
    let subnet = def.vpc_subnet.as_deref().filter(|s| !s.is_empty());

    match (vpc_id, subnet) {
        (None, None) => fail!("VPC ID or VPC subnet should be specified"),
        (_, Some(subnet)) => {
            ensure!(
                subnet.parse::<Ipv4Network>().is_ok(),
                "VPC subnet ({}) is not a valid CIDR",
                subnet
            );
        }
        (Some(_), None) => {}
    }

    Ok(())
}

fn validate_unique_names(def: &Definition) -> ValidationResult {
    ensure!(
        all_unique(def.networks.iter().map(|n| n.name.as_str())),
        "Duplicate network names found"
    );
    ensure!(
        all_unique(def.instances.iter().map(|i| i.name.as_str())),
        "Duplicate instance names found"
    );
    ensure!(
        all_unique(def.security_groups.iter().map(|sg| sg.name.as_str())),
        "Duplicate security group names found"
    );
    ensure!(
        all_unique(def.nat_gateways.iter().map(|n| n.name.as_str())),
        "Duplicate nat gateway names found"
    );
    ensure!(
        all_unique(def.elbs.iter().map(|e| e.name.as_str())),
        "Duplicate elb names found"
    );
    ensure!(
        all_unique(def.rds_clusters.iter().map(|c| c.name.as_str())),
        "Duplicate rds cluster names found"
    );
    ensure!(
        all_unique(def.rds_instances.iter().map(|i| i.name.as_str())),
        "Duplicate rds instance names found"
    );
    ensure!(
        all_unique(def.ebs_volumes.iter().map(|v| v.name.as_str())),
        "Duplicate ebs volume names found"
    );
    ensure!(
        all_unique(def.s3_buckets.iter().map(|s| s.name.as_str())),
        "Duplicate s3 bucket names found"
    );
    ensure!(
        all_unique(def.route53_zones.iter().map(|z| z.name.as_str())),
        "Duplicate route53 zone names found"
    );
    Ok(())
}

fn all_unique<'a>(names: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    names.into_iter().all(|name| seen.insert(name))
}

pub(crate) fn name_fits(name: &str) -> bool {
    name.chars().count() <= MAX_NAME_LENGTH
}

/// Distinct availability zones of the named networks
pub(crate) fn network_zones<'a>(def: &'a Definition, names: &[String]) -> HashSet<&'a str> {
    names
        .iter()
        .filter_map(|name| def.find_network(name))
        .filter_map(|n| n.availability_zone.as_deref())
        .collect()
}
