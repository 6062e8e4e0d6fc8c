use super::window::{validate_time_window, validate_weekly_window};
use super::{ValidationResult, network_zones};
use crate::model::{Definition, RdsBackup, RdsCluster, RdsInstance};

pub const ENGINE_AURORA: &str = "aurora";
pub const LICENSES: [&str; 3] = [
    "license-included",
    "bring-your-own-license",
    "general-public-license",
];
pub const STORAGE_TYPES: [&str; 3] = ["standard", "gp2", "io1"];

const MAX_RDS_NAME: usize = 255;
const MAX_DATABASE_NAME: usize = 64;
const MAX_USERNAME: usize = 16;
const ARN_PREFIX: &str = "arn:aws:rds:";

impl RdsCluster {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        let kind = "RDS Cluster";

        ensure!(!self.name.is_empty(), "{kind} name should not be null");
        ensure!(
            self.name.len() <= MAX_RDS_NAME,
            "{kind} name should not exceed {MAX_RDS_NAME} characters"
        );
        ensure!(
            !self.engine.is_empty(),
            "{kind} engine type should not be null"
        );

        if let Some(source) = set(&self.replication_source) {
            ensure!(
                source.starts_with(ARN_PREFIX),
                "{kind} replication source should be a valid amazon resource name (ARN), i.e. 'arn:aws:rds:us-east-1:123456789012:cluster:my-aurora-cluster'"
            );
        }

        validate_credentials(
            kind,
            &self.database_name,
            &self.database_username,
            &self.database_password,
        )?;

        if let Some(port) = self.port {
            validate_port(kind, port)?;
        }

        validate_backups(kind, &self.backups)?;

        if let Some(window) = set(&self.maintenance_window) {
            validate_weekly_window(window)
                .map_err(|e| prefixed(kind, "maintenance window", e))?;
        }

        validate_references(kind, def, &self.networks, &self.security_groups)?;

        if !self.networks.is_empty() || !self.availability_zones.is_empty() {
            ensure!(
                self.networks.len() >= 2 && network_zones(def, &self.networks).len() > 1,
                "{kind} should specify at least two networks in different availability zones if no cluster availability zone is specified"
            );

            let zones = network_zones(def, &self.networks);
            for az in &self.availability_zones {
                ensure!(
                    zones.contains(az.as_str()),
                    "{kind} has no network specified for the availability zone '{az}'"
                );
            }
        }

        Ok(())
    }
}

impl RdsInstance {
    pub fn validate(&self, def: &Definition) -> ValidationResult {
        let kind = "RDS Instance";

        ensure!(!self.name.is_empty(), "{kind} name should not be null");
        ensure!(
            self.name.len() <= MAX_RDS_NAME,
            "{kind} name should not exceed {MAX_RDS_NAME} characters"
        );
        ensure!(!self.size.is_empty(), "{kind} size should not be null");
        ensure!(
            self.size.starts_with("db."),
            "{kind} size should be a valid resource size. i.e. 'db.r3.large'"
        );

        self.validate_replication()?;

        let cluster = match set(&self.cluster) {
            Some(name) => match def.find_rds_cluster(name) {
                Some(cluster) => Some(cluster),
                None => fail!("{kind} cluster identifier '{name}' does not exist"),
            },
            None => None,
        };

        self.validate_database(cluster.is_some())?;
        self.validate_engine(cluster.is_some())?;

        if let Some(port) = self.port {
            ensure!(cluster.is_none(), "{kind} port should be set on cluster");
            validate_port(kind, port)?;
        }

        self.validate_storage()?;
        validate_backups(kind, &self.backups)?;
        self.validate_other(cluster.is_some())?;

        validate_references(kind, def, &self.networks, &self.security_groups)?;

        if !self.public && cluster.is_none() {
            if let Some(az) = set(&self.availability_zone) {
                ensure!(
                    network_zones(def, &self.networks).contains(az),
                    "{kind} has no network specified for the availability zone '{az}'"
                );
            }

            ensure!(
                self.networks.len() >= 2 && network_zones(def, &self.networks).len() > 1,
                "{kind} should specify at least two networks in different availability zones if no cluster availability zone is specified"
            );
        }

        Ok(())
    }

    fn validate_replication(&self) -> ValidationResult {
        if set(&self.replication_source).is_none() {
            return Ok(());
        }

        let forbidden = [
            (set(&self.engine).is_some(), "an engine"),
            (set(&self.engine_version).is_some(), "an engine version"),
            (self.storage.size.is_some(), "storage size"),
            (set(&self.cluster).is_some(), "a cluster"),
            (self.multi_az, "multi az standby instance"),
            (self.promotion_tier.is_some(), "promotion tier"),
            (set(&self.database_name).is_some(), "database name"),
            (set(&self.database_username).is_some(), "database username"),
            (set(&self.database_password).is_some(), "database password"),
            (set(&self.license).is_some(), "a license type"),
            (set(&self.timezone).is_some(), "a timezone"),
        ];

        for (present, what) in forbidden {
            ensure!(
                !present,
                "RDS Instance must not specify {what} if a replication source is set"
            );
        }

        Ok(())
    }

    fn validate_database(&self, clustered: bool) -> ValidationResult {
        if clustered {
            ensure!(
                set(&self.database_name).is_none(),
                "RDS Instance database name should be set on cluster"
            );
            ensure!(
                set(&self.database_username).is_none(),
                "RDS Instance database username should be set on cluster"
            );
            ensure!(
                set(&self.database_password).is_none(),
                "RDS Instance database password should be set on cluster"
            );
            return Ok(());
        }

        if set(&self.replication_source).is_some() {
            return Ok(());
        }

        validate_credentials(
            "RDS Instance",
            self.database_name.as_deref().unwrap_or_default(),
            self.database_username.as_deref().unwrap_or_default(),
            self.database_password.as_deref().unwrap_or_default(),
        )
    }

    fn validate_engine(&self, clustered: bool) -> ValidationResult {
        if clustered {
            ensure!(
                set(&self.engine).is_none(),
                "RDS Instance engine type should be set on cluster"
            );
            ensure!(
                set(&self.engine_version).is_none(),
                "RDS Instance engine version should be set on cluster"
            );
        } else if set(&self.replication_source).is_none() {
            ensure!(
                set(&self.engine).is_some(),
                "RDS Instance engine type should not be null"
            );
        }
        Ok(())
    }

    fn validate_storage(&self) -> ValidationResult {
        if self.is_aurora() {
            ensure!(
                self.storage.is_empty(),
                "RDS Instance storage options cannot be set if the engine type is 'aurora'"
            );
            return Ok(());
        }

        if let Some(storage_type) = set(&self.storage.storage_type) {
            ensure!(
                STORAGE_TYPES.contains(&storage_type),
                "RDS Instance storage type must be either 'standard', 'gp2' or 'io1'"
            );
        }

        if let Some(size) = self.storage.size {
            ensure!(
                (5..=6144).contains(&size),
                "RDS Instance storage size must be between 5 - 6144 GB"
            );
        }

        if let Some(iops) = self.storage.iops {
            ensure!(
                iops % 1000 == 0,
                "RDS Instance storage iops must be a multiple of 1000"
            );
        }

        Ok(())
    }

    fn validate_other(&self, clustered: bool) -> ValidationResult {
        if let Some(tier) = self.promotion_tier {
            ensure!(
                self.is_aurora(),
                "RDS Instance promotion tier should only be specified when using the aurora engine"
            );
            ensure!(
                (0..=15).contains(&tier),
                "RDS Instance promotion tier should be between 0 - 15"
            );
        }

        ensure!(
            !(set(&self.availability_zone).is_some() && self.multi_az),
            "RDS Instance cannot specify both an availability zone and a multi az standby instance"
        );

        if let Some(window) = set(&self.maintenance_window) {
            validate_weekly_window(window)
                .map_err(|e| prefixed("RDS Instance", "maintenance window", e))?;
        }

        ensure!(
            self.public || clustered || !self.networks.is_empty(),
            "RDS Instance should specify at least one network if not set to public"
        );

        if let Some(engine) = set(&self.engine) {
            if engine != ENGINE_AURORA {
                ensure!(
                    set(&self.license).is_some_and(|l| LICENSES.contains(&l)),
                    "RDS Instance license must be one of '{}'",
                    LICENSES.join("', '")
                );
            }
        }

        Ok(())
    }

    fn is_aurora(&self) -> bool {
        set(&self.engine) == Some(ENGINE_AURORA)
    }
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn prefixed(
    kind: &str,
    what: &str,
    err: crate::error::ValidationError,
) -> crate::error::ValidationError {
    crate::error::ValidationError::new(format!("{kind} {what}: {}", err.message()))
}

fn validate_credentials(kind: &str, name: &str, username: &str, password: &str) -> ValidationResult {
    ensure!(!name.is_empty(), "{kind} database name should not be null");
    ensure!(
        name.len() <= MAX_DATABASE_NAME,
        "{kind} database name should not exceed {MAX_DATABASE_NAME} characters"
    );
    ensure!(
        name.chars().all(char::is_alphanumeric),
        "{kind} database name can only contain alphanumeric characters"
    );

    ensure!(
        !username.is_empty(),
        "{kind} database username should not be null"
    );
    ensure!(
        username.len() <= MAX_USERNAME,
        "{kind} database username should not exceed {MAX_USERNAME} characters"
    );

    ensure!(
        !password.is_empty(),
        "{kind} database password should not be null"
    );
    ensure!(
        (8..=41).contains(&password.len()),
        "{kind} database password should be between 8 and 41 characters"
    );
    if let Some(c) = password.chars().find(|c| is_symbol_or_mark(*c)) {
        fail!("{kind} database password contains an offending character: '{c}'");
    }

    Ok(())
}

/// Math, currency, modifier and combining characters are rejected
fn is_symbol_or_mark(c: char) -> bool {
    matches!(c, '+' | '<' | '=' | '>' | '|' | '~' | '$' | '^' | '`')
        || (!c.is_ascii() && !c.is_alphanumeric() && !c.is_whitespace())
}

fn validate_port(kind: &str, port: i64) -> ValidationResult {
    ensure!(
        (1150..=65535).contains(&port),
        "{kind} port number should be between 1150 and 65535"
    );
    Ok(())
}

fn validate_backups(kind: &str, backups: &RdsBackup) -> ValidationResult {
    if let Some(retention) = backups.retention {
        ensure!(
            (1..=35).contains(&retention),
            "{kind} backup retention should be between 1 and 35 days"
        );
    }

    if let Some(window) = backups.window.as_deref().filter(|w| !w.is_empty()) {
        validate_time_window(window).map_err(|e| prefixed(kind, "backup window", e))?;
    }

    Ok(())
}

fn validate_references(
    kind: &str,
    def: &Definition,
    networks: &[String],
    security_groups: &[String],
) -> ValidationResult {
    for nw in networks {
        ensure!(
            def.find_network(nw).is_some(),
            "{kind} network '{nw}' does not exist"
        );
    }

    for sg in security_groups {
        ensure!(
            def.find_security_group(sg).is_some(),
            "{kind} security group '{sg}' does not exist"
        );
    }

    Ok(())
}
