use super::{MAX_NAME_LENGTH, ValidationResult, name_fits};
use crate::model::{Definition, Elb, ElbListener};

pub const LISTENER_PROTOCOLS: [&str; 4] = ["http", "https", "tcp", "ssl"];

impl Elb {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        ensure!(!self.name.is_empty(), "ELB name should not be null");
        ensure!(
            name_fits(&self.name),
            "ELB name can't be greater than {} characters",
            MAX_NAME_LENGTH
        );
        ensure!(
            !self.listeners.is_empty(),
            "ELB must specify at least one listener"
        );
        ensure!(
            self.private || !self.networks.is_empty(),
            "ELB must specify at least one network if public"
        );

        for name in &self.networks {
            let Some(network) = def.find_network(name) else {
                fail!("ELB network '{}' does not exist", name);
            };
            ensure!(
                self.private || network.public,
                "ELB network '{}' is not a public network",
                name
            );
        }

        for name in &self.instances {
            ensure!(
                def.find_instance(name).is_some(),
                "ELB instance '{}' does not exist",
                name
            );
        }

        for name in &self.security_groups {
            ensure!(
                def.find_security_group(name).is_some(),
                "ELB security group '{}' does not exist",
                name
            );
        }

        for listener in &self.listeners {
            listener.validate()?;
        }

        Ok(())
    }
}

impl ElbListener {
    pub fn validate(&self) -> ValidationResult {
        ensure!(
            (1..=65535).contains(&self.from_port),
            "From Port ({}) is out of range [1 - 65535]",
            self.from_port
        );
        ensure!(
            (1..=65535).contains(&self.to_port),
            "To Port ({}) is out of range [1 - 65535]",
            self.to_port
        );
        ensure!(
            LISTENER_PROTOCOLS.contains(&self.protocol.as_str()),
            "ELB Protocol must be one of http, https, tcp or ssl"
        );

        let needs_cert = self.protocol == "https" || self.protocol == "ssl";
        let has_cert = self.ssl_cert.as_deref().is_some_and(|c| !c.is_empty());
        ensure!(
            !needs_cert || has_cert,
            "ELB listener must specify an ssl cert when protocol is https/ssl"
        );

        Ok(())
    }
}
