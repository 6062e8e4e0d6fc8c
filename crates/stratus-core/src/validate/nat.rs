use super::{MAX_NAME_LENGTH, ValidationResult, name_fits};
use crate::model::{Definition, NatGateway};

impl NatGateway {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        ensure!(!self.name.is_empty(), "Nat Gateway name should not be null");
        ensure!(
            name_fits(&self.name),
            "Nat Gateway name can't be greater than {} characters",
            MAX_NAME_LENGTH
        );
        ensure!(
            !self.public_network.is_empty(),
            "Nat Gateway should specify a public network"
        );

        match def.find_network(&self.public_network) {
            Some(network) => ensure!(
                network.public,
                "Nat Gateway public network '{}' is not a public network",
                self.public_network
            ),
            None => fail!(
                "Nat Gateway public network '{}' is not defined",
                self.public_network
            ),
        }

        Ok(())
    }
}
