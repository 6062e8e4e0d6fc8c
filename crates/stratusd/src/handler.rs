//! Request handlers
//!
//! One handler per subject. Each takes the raw request body and either
//! returns the resulting provisioning model or a [`HandlerError`]; nothing
//! is persisted unless the whole request succeeds.

use crate::error::{HandlerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use stratus_cloud::{
    ModelStore, ProvisioningModel, WorkflowGenerator, WorkflowKind, with_timeout,
};
use stratus_core::{Payload, validate_datacenter, validate_definition};

/// Provider types an import can complete for
const IMPORT_PROVIDERS: [&str; 2] = ["aws", "aws-fake"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Create,
    Delete,
    Import,
    ImportDone,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Create => write!(f, "create"),
            Subject::Delete => write!(f, "delete"),
            Subject::Import => write!(f, "import"),
            Subject::ImportDone => write!(f, "import-done"),
        }
    }
}

/// The error document sent back for a failed request
pub fn error_reply(message: impl fmt::Display) -> String {
    serde_json::json!({ "error": message.to_string() }).to_string()
}

pub struct Handler {
    store: Arc<dyn ModelStore>,
    workflows: Arc<dyn WorkflowGenerator>,
    timeout: Duration,
}

impl Handler {
    pub fn new(
        store: Arc<dyn ModelStore>,
        workflows: Arc<dyn WorkflowGenerator>,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            workflows,
            timeout,
        }
    }

    /// Dispatch a request and render its reply document
    pub async fn handle(&self, subject: Subject, data: &[u8]) -> String {
        let result = match subject {
            Subject::Create => self.create(data).await,
            Subject::Delete => self.delete(data).await,
            Subject::Import => self.import(data).await,
            Subject::ImportDone => self.import_done(data).await,
        };

        match result.and_then(|model| model.to_json().map_err(HandlerError::Output)) {
            Ok(reply) => {
                tracing::info!(%subject, "request handled");
                reply
            }
            Err(e) => {
                match &e {
                    HandlerError::Payload { reason } => {
                        tracing::warn!(%subject, %reason, "rejected request: {}", e)
                    }
                    _ => tracing::warn!(%subject, "rejected request: {}", e),
                }
                error_reply(&e)
            }
        }
    }

    /// Validate, map and diff a definition against the previous build
    pub async fn create(&self, data: &[u8]) -> Result<ProvisioningModel> {
        let payload = Payload::from_json(data).map_err(HandlerError::payload)?;
        validate_datacenter(&payload.datacenter)?;
        validate_definition(&payload.service)?;

        let mut model = stratus_mapper::map_payload(&payload);

        let previous = match payload.previous() {
            Some(id) => {
                let previous = self.previous(id).await?;
                let requested = payload.service.vpc_id.as_deref().filter(|v| !v.is_empty());
                if requested.is_some_and(|vpc| previous.vpc_id() != Some(vpc)) {
                    return Err(HandlerError::VpcChanged);
                }
                previous
            }
            None => ProvisioningModel::default(),
        };

        model.inherit(&previous);
        model.reconcile(&previous);
        model.workflow = self.workflow(WorkflowKind::Create, &model).await?;

        Ok(model)
    }

    /// Schedule every component of the previous build for deletion
    pub async fn delete(&self, data: &[u8]) -> Result<ProvisioningModel> {
        let payload = Payload::from_json(data).map_err(HandlerError::payload)?;
        let id = payload
            .previous()
            .ok_or_else(|| HandlerError::payload("missing previous service id"))?;

        let mut model = self.previous(id).await?;
        model.mark_all_for_deletion();
        model.workflow = self.workflow(WorkflowKind::Delete, &model).await?;

        Ok(model)
    }

    /// Map a provider-observed definition; it is not validated
    pub async fn import(&self, data: &[u8]) -> Result<ProvisioningModel> {
        let payload = Payload::from_json(data).map_err(HandlerError::payload)?;

        let mut model = stratus_mapper::map_payload(&payload);
        model.vpcs.items.retain(|vpc| !vpc.vpc_id.is_empty());

        let previous = match payload.previous() {
            Some(id) => self.previous(id).await?,
            None => ProvisioningModel::default(),
        };

        model.inherit(&previous);
        model.reconcile(&previous);
        model.workflow = self.workflow(WorkflowKind::Import, &model).await?;

        Ok(model)
    }

    /// Turn a completed import into a stored definition and mapping
    pub async fn import_done(&self, data: &[u8]) -> Result<ProvisioningModel> {
        let mut model = ProvisioningModel::from_json(data).map_err(HandlerError::payload)?;

        if !IMPORT_PROVIDERS.contains(&model.provider_type.as_str()) {
            return Err(HandlerError::UnsupportedProvider(model.provider_type));
        }

        stratus_mapper::normalize_import(&mut model);
        let definition = stratus_mapper::definition_yaml(&model)?;

        with_timeout(
            self.timeout,
            "set import",
            self.store.set_import(&model.id, &model, &definition),
        )
        .await
        .map_err(HandlerError::dependency("store mapping"))?;

        tracing::info!(service = %model.id, "import stored");
        Ok(model)
    }

    async fn previous(&self, id: &str) -> Result<ProvisioningModel> {
        with_timeout(self.timeout, "get mapping", self.store.get_mapping(id))
            .await
            .map_err(HandlerError::dependency("get previous output"))
    }

    async fn workflow(
        &self,
        kind: WorkflowKind,
        model: &ProvisioningModel,
    ) -> Result<stratus_cloud::Workflow> {
        self.workflows
            .generate(kind, &model.counts())
            .await
            .map_err(HandlerError::Workflow)
    }
}
