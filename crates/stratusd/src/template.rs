//! Workflow templates on disk

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use stratus_cloud::{CloudError, Workflow, WorkflowCounts, WorkflowGenerator, WorkflowKind};

/// Loads `<dir>/<kind>-workflow.json` and drops the idle steps
pub struct TemplateWorkflow {
    dir: PathBuf,
}

impl TemplateWorkflow {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn template_path(&self, kind: WorkflowKind) -> PathBuf {
        self.dir.join(format!("{}-workflow.json", kind))
    }
}

#[async_trait]
impl WorkflowGenerator for TemplateWorkflow {
    async fn generate(
        &self,
        kind: WorkflowKind,
        counts: &WorkflowCounts,
    ) -> stratus_cloud::Result<Workflow> {
        let path = self.template_path(kind);
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            CloudError::Workflow(format!("cannot read {}: {}", path.display(), e))
        })?;
        let template = Workflow::from_json(&content).map_err(|e| {
            CloudError::Workflow(format!("invalid template {}: {}", path.display(), e))
        })?;

        let workflow = template.optimize(counts);
        tracing::debug!(
            %kind,
            template = template.arcs.len(),
            arcs = workflow.arcs.len(),
            "generated workflow"
        );
        Ok(workflow)
    }
}
