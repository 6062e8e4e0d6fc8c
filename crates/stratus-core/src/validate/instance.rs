use super::{MAX_NAME_LENGTH, ValidationResult, name_fits};
use crate::model::{Definition, Instance};
use ipnetwork::Ipv4Network;

impl Instance {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        ensure!(!self.name.is_empty(), "Instance name should not be null");
        ensure!(
            name_fits(&self.name),
            "Instance name can't be greater than {} characters",
            MAX_NAME_LENGTH
        );
        ensure!(
            !self.instance_type.is_empty(),
            "Instance type should not be null"
        );
        ensure!(!self.image.is_empty(), "Instance image should not be null");
        ensure!(self.count >= 1, "Instance count should not be < 1");
        ensure!(
            !self.network.is_empty(),
            "Instance network should not be null"
        );

        let Some(network) = def.find_network(&self.network) else {
            fail!("Instance network '{}' does not exist", self.network);
        };

        let Ok(cidr) = network.subnet.parse::<Ipv4Network>() else {
            fail!("Could not process network");
        };
        self.validate_addresses(cidr)?;

        for sg in &self.security_groups {
            ensure!(
                def.find_security_group(sg).is_some(),
                "Instance security group '{}' does not exist",
                sg
            );
        }

        for attachment in &self.volumes {
            ensure!(
                !attachment.device.is_empty(),
                "Instance volume device should not be null"
            );

            let Some(volume) = def.find_ebs_volume(&attachment.volume) else {
                fail!("Instance volume '{}' does not exist", attachment.volume);
            };

            ensure!(
                volume.count >= self.count,
                "Instance volume group '{}' does not contain enough volumes for {} instances",
                attachment.volume,
                self.count
            );
        }

        Ok(())
    }

    /// Every address handed out to the group must fall inside the network
    /// and must not wrap past the last octet.
    fn validate_addresses(&self, cidr: Ipv4Network) -> ValidationResult {
        ensure!(
            self.start_ip.is_some(),
            "Instance IP invalid. IP must be a valid IP in the same range as it's network"
        );

        for index in 0..self.count {
            let Some(ip) = self.address(index) else {
                fail!("Instance IP invalid. Allocated IP is lower than Start IP");
            };

            ensure!(
                cidr.contains(ip),
                "Instance IP invalid. IP must be a valid IP in the same range as it's network"
            );
        }

        Ok(())
    }
}
