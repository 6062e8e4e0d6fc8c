use super::{MAX_NAME_LENGTH, ValidationResult, name_fits};
use crate::model::{Definition, SecurityGroup, SecurityGroupRule};
use ipnetwork::IpNetwork;
use std::net::IpAddr;

pub const PROTOCOL_TCP: &str = "tcp";
pub const PROTOCOL_UDP: &str = "udp";
pub const PROTOCOL_ICMP: &str = "icmp";
pub const ANY: &str = "any";

impl SecurityGroup {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        ensure!(
            !self.name.is_empty(),
            "Security Group name should not be null"
        );
        ensure!(
            name_fits(&self.name),
            "Security Group name can't be greater than {} characters",
            MAX_NAME_LENGTH
        );

        for rule in self.ingress.iter().chain(&self.egress) {
            rule.validate(def)?;
        }

        Ok(())
    }
}

impl SecurityGroupRule {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        validate_endpoint(&self.ip, def)?;

        let range = port_range(&self.protocol)?;
        validate_port(&self.from_port, "From", range)?;
        validate_port(&self.to_port, "To", range)?;

        Ok(())
    }
}

/// Valid port bounds for a protocol
fn port_range(protocol: &str) -> Result<(i64, i64), crate::error::ValidationError> {
    match protocol {
        PROTOCOL_TCP | PROTOCOL_UDP => Ok((1, 65535)),
        PROTOCOL_ICMP => Ok((0, 255)),
        ANY => Ok((0, 65535)),
        _ => fail!("Protocol is invalid"),
    }
}

/// Accepts `any`, a declared network name, a CIDR or a bare IP
fn validate_endpoint(ip: &str, def: &Definition) -> ValidationResult {
    let valid = ip == ANY
        || def.find_network(ip).is_some()
        || ip.parse::<IpNetwork>().is_ok()
        || ip.parse::<IpAddr>().is_ok();

    ensure!(valid, "Security Group IP ({}) is not valid", ip);
    Ok(())
}

fn validate_port(port: &str, kind: &str, (min, max): (i64, i64)) -> ValidationResult {
    if port == ANY {
        return Ok(());
    }

    let Ok(value) = port.parse::<i64>() else {
        fail!("Security Group {} Port ({}) is not valid", kind, port);
    };

    ensure!(
        (min..=max).contains(&value),
        "Security Group {} Port ({}) is out of range [{} - {}]",
        kind,
        port,
        min,
        max
    );
    Ok(())
}
