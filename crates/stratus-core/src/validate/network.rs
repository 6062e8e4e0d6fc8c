use super::{MAX_NAME_LENGTH, ValidationResult, name_fits};
use crate::model::{Definition, Network};
use ipnetwork::Ipv4Network;

impl Network {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        ensure!(
            self.subnet.parse::<Ipv4Network>().is_ok(),
            "Network CIDR is not valid"
        );

        ensure!(!self.name.is_empty(), "Network name should not be null");
        ensure!(
            name_fits(&self.name),
            "Network name can't be greater than {} characters",
            MAX_NAME_LENGTH
        );

        if let Some(nat) = self.nat_gateway.as_deref().filter(|n| !n.is_empty()) {
            ensure!(
                !self.public,
                "Public Network should not specify a nat gateway"
            );
            ensure!(
                def.find_nat_gateway(nat).is_some(),
                "Network nat gateway '{}' does not exist",
                nat
            );
        }

        Ok(())
    }
}
