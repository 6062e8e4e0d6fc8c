//! Storage of provisioning models and definitions
//!
//! Handlers fetch the previous model of a service and persist new ones
//! through [`ModelStore`]. [`FileStore`] keeps one directory per service:
//!
//! ```text
//! <root>/<service id>/mapping.json
//! <root>/<service id>/mapping.json.backup
//! <root>/<service id>/definition.yaml
//! ```
//!
//! Files are written to a staged `.tmp` sibling and renamed into place, so a
//! cancelled write leaves the previous content readable.

use crate::error::{CloudError, Result};
use crate::model::ProvisioningModel;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::sync::RwLock;

const MAPPING_VERSION: u32 = 1;
const MAPPING_FILE: &str = "mapping.json";
const MAPPING_BACKUP: &str = "mapping.json.backup";
const DEFINITION_FILE: &str = "definition.yaml";
const STAGED_SUFFIX: &str = "tmp";

/// Request/reply access to stored service data
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// The stored provisioning model of a service
    async fn get_mapping(&self, id: &str) -> Result<ProvisioningModel>;

    async fn set_mapping(&self, id: &str, model: &ProvisioningModel) -> Result<()>;

    /// Store the canonical (YAML) form of a service definition
    async fn set_definition(&self, id: &str, definition: &str) -> Result<()>;

    /// Store an imported service: both its definition and its mapping, or
    /// neither of them
    async fn set_import(
        &self,
        id: &str,
        model: &ProvisioningModel,
        definition: &str,
    ) -> Result<()>;
}

/// Run a store call, failing with [`CloudError::Timeout`] after `limit`
pub async fn with_timeout<T, F>(limit: Duration, operation: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => Err(CloudError::Timeout(format!(
            "{} did not complete within {:?}",
            operation, limit
        ))),
    }
}

/// On-disk envelope of a stored mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredMapping {
    version: u32,
    updated_at: DateTime<Utc>,
    mapping: ProvisioningModel,
}

/// JSON file backed store
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn service_dir(&self, id: &str) -> Result<PathBuf> {
        // ids become directory names
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && id != "."
            && id != "..";
        if !valid {
            return Err(CloudError::StoreError(format!("Invalid service id: '{}'", id)));
        }
        Ok(self.root.join(id))
    }

    async fn ensure_service_dir(&self, id: &str) -> Result<PathBuf> {
        let dir = self.service_dir(id)?;
        if !dir.exists() {
            fs::create_dir_all(&dir).await?;
            tracing::debug!("Created store directory: {}", dir.display());
        }
        Ok(dir)
    }
}

fn staged(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".");
    staged.push(STAGED_SUFFIX);
    PathBuf::from(staged)
}

/// Write the staged sibling of `path`, returning where it went
async fn stage(path: &Path, content: impl AsRef<[u8]>) -> Result<PathBuf> {
    let staged = staged(path);
    fs::write(&staged, content).await?;
    Ok(staged)
}

fn mapping_content(model: &ProvisioningModel) -> Result<String> {
    let stored = StoredMapping {
        version: MAPPING_VERSION,
        updated_at: Utc::now(),
        mapping: model.clone(),
    };
    Ok(serde_json::to_string_pretty(&stored)?)
}

/// Keep a copy of the current mapping; the mapping itself is never moved
async fn backup_mapping(dir: &Path) -> Result<()> {
    let path = dir.join(MAPPING_FILE);
    if path.exists() {
        fs::copy(&path, dir.join(MAPPING_BACKUP)).await?;
        tracing::debug!("Created mapping backup: {}", path.display());
    }
    Ok(())
}

/// Move a staged definition and mapping into place together.
///
/// Runs on a blocking thread so a dropped caller cannot stop it halfway.
/// When the mapping cannot be moved the previous definition is put back.
fn commit_import(dir: &Path, definition: &Path, mapping: &Path) -> std::io::Result<()> {
    let definition_path = dir.join(DEFINITION_FILE);
    let previous = std::fs::read(&definition_path).ok();

    std::fs::rename(definition, &definition_path)?;

    if let Err(e) = std::fs::rename(mapping, dir.join(MAPPING_FILE)) {
        let restored = match previous {
            Some(content) => std::fs::write(&definition_path, content),
            None => std::fs::remove_file(&definition_path),
        };
        if let Err(restore) = restored {
            tracing::warn!(
                "Could not restore {}: {}",
                definition_path.display(),
                restore
            );
        }
        return Err(e);
    }

    Ok(())
}

#[async_trait]
impl ModelStore for FileStore {
    async fn get_mapping(&self, id: &str) -> Result<ProvisioningModel> {
        let path = self.service_dir(id)?.join(MAPPING_FILE);
        if !path.exists() {
            return Err(CloudError::ModelNotFound(id.to_string()));
        }

        let content = fs::read_to_string(&path).await?;
        let stored: StoredMapping = serde_json::from_str(&content)?;

        if stored.version > MAPPING_VERSION {
            return Err(CloudError::StoreError(format!(
                "Mapping version {} is newer than supported version {}",
                stored.version, MAPPING_VERSION
            )));
        }

        tracing::debug!(id, updated_at = %stored.updated_at, "Loaded mapping");
        Ok(stored.mapping)
    }

    async fn set_mapping(&self, id: &str, model: &ProvisioningModel) -> Result<()> {
        let dir = self.ensure_service_dir(id).await?;
        let path = dir.join(MAPPING_FILE);

        let staged = stage(&path, mapping_content(model)?).await?;
        backup_mapping(&dir).await?;
        fs::rename(&staged, &path).await?;

        tracing::debug!(id, "Saved mapping");
        Ok(())
    }

    async fn set_definition(&self, id: &str, definition: &str) -> Result<()> {
        let dir = self.ensure_service_dir(id).await?;
        let path = dir.join(DEFINITION_FILE);

        let staged = stage(&path, definition).await?;
        fs::rename(&staged, &path).await?;

        tracing::debug!(id, "Saved definition");
        Ok(())
    }

    async fn set_import(
        &self,
        id: &str,
        model: &ProvisioningModel,
        definition: &str,
    ) -> Result<()> {
        let dir = self.ensure_service_dir(id).await?;

        let staged_mapping = stage(&dir.join(MAPPING_FILE), mapping_content(model)?).await?;
        let staged_definition = stage(&dir.join(DEFINITION_FILE), definition).await?;
        backup_mapping(&dir).await?;

        tokio::task::spawn_blocking(move || {
            commit_import(&dir, &staged_definition, &staged_mapping)
        })
        .await
        .map_err(|e| CloudError::StoreError(format!("Import commit did not finish: {}", e)))??;

        tracing::debug!(id, "Saved import");
        Ok(())
    }
}

/// In-memory store, used by tests and one-shot CLI runs
#[derive(Default)]
pub struct MemoryStore {
    mappings: RwLock<HashMap<String, ProvisioningModel>>,
    definitions: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn definition(&self, id: &str) -> Option<String> {
        self.definitions.read().await.get(id).cloned()
    }

    pub async fn contains_mapping(&self, id: &str) -> bool {
        self.mappings.read().await.contains_key(id)
    }
}

#[async_trait]
impl ModelStore for MemoryStore {
    async fn get_mapping(&self, id: &str) -> Result<ProvisioningModel> {
        self.mappings
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CloudError::ModelNotFound(id.to_string()))
    }

    async fn set_mapping(&self, id: &str, model: &ProvisioningModel) -> Result<()> {
        self.mappings
            .write()
            .await
            .insert(id.to_string(), model.clone());
        Ok(())
    }

    async fn set_definition(&self, id: &str, definition: &str) -> Result<()> {
        self.definitions
            .write()
            .await
            .insert(id.to_string(), definition.to_string());
        Ok(())
    }

    async fn set_import(
        &self,
        id: &str,
        model: &ProvisioningModel,
        definition: &str,
    ) -> Result<()> {
        let mut mappings = self.mappings.write().await;
        let mut definitions = self.definitions.write().await;
        mappings.insert(id.to_string(), model.clone());
        definitions.insert(id.to_string(), definition.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn model(id: &str) -> ProvisioningModel {
        ProvisioningModel {
            id: id.to_string(),
            name: "svc".to_string(),
            provider_type: "aws".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_file_store_save_load() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.set_mapping("svc-1", &model("svc-1")).await.unwrap();
        let loaded = store.get_mapping("svc-1").await.unwrap();
        assert_eq!(loaded, model("svc-1"));

        store.set_mapping("svc-1", &model("svc-1")).await.unwrap();
        let dir = temp_dir.path().join("svc-1");
        assert!(dir.join(MAPPING_BACKUP).exists());
        assert!(dir.join(MAPPING_FILE).exists());
        assert!(!staged(&dir.join(MAPPING_FILE)).exists());
    }

    #[tokio::test]
    async fn test_file_store_keeps_mapping_when_write_is_dropped() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        store.set_mapping("svc-1", &model("svc-1")).await.unwrap();

        let mut next = model("svc-1");
        next.name = "next".to_string();
        // dropped before the first poll completes the write
        let write = store.set_mapping("svc-1", &next);
        let _ = with_timeout(Duration::ZERO, "set mapping", write).await;

        let loaded = store.get_mapping("svc-1").await.unwrap();
        assert!(loaded.name == "svc" || loaded.name == "next");
    }

    #[tokio::test]
    async fn test_file_store_import() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());

        store
            .set_import("svc-9", &model("svc-9"), "name: svc\n")
            .await
            .unwrap();

        let dir = temp_dir.path().join("svc-9");
        assert_eq!(store.get_mapping("svc-9").await.unwrap(), model("svc-9"));
        assert_eq!(
            std::fs::read_to_string(dir.join(DEFINITION_FILE)).unwrap(),
            "name: svc\n"
        );
        assert!(!staged(&dir.join(DEFINITION_FILE)).exists());
    }

    #[test]
    fn test_commit_import_restores_definition() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path();
        std::fs::write(dir.join(DEFINITION_FILE), "name: old\n").unwrap();

        let staged_definition = staged(&dir.join(DEFINITION_FILE));
        std::fs::write(&staged_definition, "name: new\n").unwrap();
        // the staged mapping was never written
        let staged_mapping = staged(&dir.join(MAPPING_FILE));

        assert!(commit_import(dir, &staged_definition, &staged_mapping).is_err());
        assert_eq!(
            std::fs::read_to_string(dir.join(DEFINITION_FILE)).unwrap(),
            "name: old\n"
        );
        assert!(!dir.join(MAPPING_FILE).exists());
    }

    #[test]
    fn test_commit_import_removes_new_definition() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path();

        let staged_definition = staged(&dir.join(DEFINITION_FILE));
        std::fs::write(&staged_definition, "name: new\n").unwrap();
        let staged_mapping = staged(&dir.join(MAPPING_FILE));

        assert!(commit_import(dir, &staged_definition, &staged_mapping).is_err());
        assert!(!dir.join(DEFINITION_FILE).exists());
    }

    #[tokio::test]
    async fn test_file_store_missing_mapping() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());

        let err = store.get_mapping("nope").await.unwrap_err();
        assert!(matches!(err, CloudError::ModelNotFound(_)));
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_ids() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());

        let err = store.set_definition("../escape", "name: x").await.unwrap_err();
        assert!(matches!(err, CloudError::StoreError(_)));
    }

    #[tokio::test]
    async fn test_file_store_definition() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.set_definition("svc-1", "name: svc\n").await.unwrap();
        let content = std::fs::read_to_string(temp_dir.path().join("svc-1/definition.yaml")).unwrap();
        assert_eq!(content, "name: svc\n");
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.get_mapping("svc-1").await.is_err());

        store.set_mapping("svc-1", &model("svc-1")).await.unwrap();
        store.set_definition("svc-1", "name: svc").await.unwrap();
        assert!(store.contains_mapping("svc-1").await);
        assert_eq!(store.definition("svc-1").await.as_deref(), Some("name: svc"));

        store
            .set_import("svc-9", &model("svc-9"), "name: svc")
            .await
            .unwrap();
        assert!(store.contains_mapping("svc-9").await);
        assert_eq!(store.definition("svc-9").await.as_deref(), Some("name: svc"));
    }

    #[tokio::test]
    async fn test_with_timeout() {
        let ok = with_timeout(Duration::from_secs(1), "get mapping", async { Ok(1) }).await;
        assert_eq!(ok.unwrap(), 1);

        let slow = with_timeout(Duration::from_millis(10), "get mapping", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(matches!(slow, Err(CloudError::Timeout(_))));
    }
}
