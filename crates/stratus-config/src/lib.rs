//! Stratus daemon configuration
//!
//! The daemon reads an optional `stratus.kdl`:
//!
//! ```kdl
//! store "/var/lib/stratus"
//! timeout 2
//! templates "/etc/stratus/arcs"
//! log "stratusd=debug"
//! ```

pub mod error;

pub use error::*;

use kdl::{KdlDocument, KdlNode, KdlValue};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the configuration file directly
pub const CONFIG_PATH_ENV: &str = "STRATUS_CONFIG_PATH";

const CONFIG_FILES: [&str; 2] = ["stratus.kdl", ".stratus.kdl"];
const APP_DIR: &str = "stratus";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root directory of the file-backed model store
    pub store: PathBuf,

    /// Timeout applied to every model store call
    pub timeout: Duration,

    /// Directory holding the `<kind>-workflow.json` templates
    pub templates: PathBuf,

    /// Log filter directive used when `RUST_LOG` is unset
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(".stratus")),
            timeout: Duration::from_secs(1),
            templates: PathBuf::from("arcs"),
            log: "info".to_string(),
        }
    }
}

impl Config {
    /// Discover and load the configuration, falling back to defaults
    pub fn load() -> Result<Self> {
        match find_config_file()? {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading configuration");
        Self::from_kdl(&content)
    }

    /// Parse a KDL document; unknown nodes are ignored
    pub fn from_kdl(content: &str) -> Result<Self> {
        let doc: KdlDocument = content.parse()?;
        let mut config = Self::default();

        for node in doc.nodes() {
            match node.name().value() {
                "store" => config.store = PathBuf::from(string_arg(node)?),
                "templates" => config.templates = PathBuf::from(string_arg(node)?),
                "log" => config.log = string_arg(node)?.to_string(),
                "timeout" => config.timeout = parse_timeout(node)?,
                other => tracing::debug!(node = other, "ignoring unknown configuration node"),
            }
        }

        Ok(config)
    }
}

fn invalid(node: &KdlNode, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        node: node.name().value().to_string(),
        reason: reason.into(),
    }
}

fn first_value(node: &KdlNode) -> Result<&KdlValue> {
    node.entries()
        .first()
        .map(|e| e.value())
        .ok_or_else(|| invalid(node, "missing value"))
}

fn string_arg(node: &KdlNode) -> Result<&str> {
    first_value(node)?
        .as_string()
        .ok_or_else(|| invalid(node, "expected a string"))
}

/// Seconds, integer or fractional, strictly positive
fn parse_timeout(node: &KdlNode) -> Result<Duration> {
    let value = first_value(node)?;
    let seconds = match (value.as_integer(), value.as_float()) {
        (Some(i), _) => i as f64,
        (None, Some(f)) => f,
        _ => return Err(invalid(node, "expected a number of seconds")),
    };

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(invalid(node, "must be greater than zero"));
    }

    Ok(Duration::from_secs_f64(seconds))
}

/// Per-user configuration directory (`<config_dir>/stratus`)
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join(APP_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// Locate `stratus.kdl`.
///
/// Search order:
/// 1. `STRATUS_CONFIG_PATH`
/// 2. current directory: `stratus.kdl`, `.stratus.kdl`
/// 3. `<config_dir>/stratus/stratus.kdl`
///
/// `None` when no file exists.
pub fn find_config_file() -> Result<Option<PathBuf>> {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(Some(path));
        }
        tracing::warn!(path = %path.display(), "{} points to a missing file", CONFIG_PATH_ENV);
    }

    let current_dir = std::env::current_dir()?;
    for filename in &CONFIG_FILES {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join(APP_DIR).join(CONFIG_FILES[0]);
        if global_config.exists() {
            return Ok(Some(global_config));
        }
    }

    Ok(None)
}
