use super::ValidationResult;
use crate::model::EbsVolume;

impl EbsVolume {
    pub fn validate(&self) -> ValidationResult {
        ensure!(!self.name.is_empty(), "EBS Volume name should not be null");
        ensure!(
            !self.availability_zone.is_empty(),
            "EBS Volume availability zone name should not be null"
        );
        ensure!(
            !self.volume_type.is_empty(),
            "EBS Volume type should not be null"
        );

        let has_key = self
            .encryption_key_id
            .as_deref()
            .is_some_and(|k| !k.is_empty());
        ensure!(
            !self.encrypted || has_key,
            "EBS Volume encryption key id (KMS key id) should be set if volume is encrypted"
        );

        ensure!(
            self.volume_type == "io1" || self.iops.is_none(),
            "EBS Volume type must be 'io1' when specifying iops"
        );

        if let Some(size) = self.size {
            ensure!(
                (1..=16384).contains(&size),
                "EBS Volume size should be between 1 - 16384 (GB)"
            );
        }

        ensure!(
            self.count >= 1,
            "EBS volume count should not be less than 1"
        );

        Ok(())
    }
}
