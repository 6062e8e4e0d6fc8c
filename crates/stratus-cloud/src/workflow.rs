//! Workflow counts and arcs
//!
//! The model emits, per resource collection and operation, how many
//! components the executor has to process. A workflow template is a graph
//! of steps named after those counts (`creating_networks`,
//! `networks_created`, ...); steps with nothing to do are optimized away.

use crate::error::Result;
use crate::reconcile::Resources;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Per-step component counts, keyed by workflow vertex name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowCounts(BTreeMap<String, usize>);

impl WorkflowCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, vertex: impl Into<String>, count: usize) {
        self.0.insert(vertex.into(), count);
    }

    pub fn get(&self, vertex: &str) -> Option<usize> {
        self.0.get(vertex).copied()
    }

    /// Record the create/update/delete counts of one collection
    pub fn record<C>(&mut self, collection: &str, resources: &Resources<C>) {
        let create = resources.to_create.len();
        let update = resources.to_update.len();
        let delete = resources.to_delete.len();

        self.set(format!("creating_{}", collection), create);
        self.set(format!("{}_created", collection), create);
        self.set(format!("updating_{}", collection), update);
        self.set(format!("{}_updated", collection), update);
        self.set(format!("deleting_{}", collection), delete);
        self.set(format!("{}_deleted", collection), delete);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Vertices with nothing to process
    fn idle(&self) -> BTreeSet<&str> {
        self.iter()
            .filter(|(_, count)| *count == 0)
            .map(|(vertex, _)| vertex)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub destination: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// An ordered list of dependency arcs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    pub arcs: Vec<Edge>,
}

impl Workflow {
    pub fn new(arcs: Vec<Edge>) -> Self {
        Self { arcs }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Remove every vertex whose count is zero.
    ///
    /// Predecessors of a removed vertex are linked directly to its
    /// successors so the ordering between the remaining steps is preserved.
    /// Vertices without a recorded count (start, end, ...) are kept.
    pub fn optimize(&self, counts: &WorkflowCounts) -> Workflow {
        let mut arcs = self.arcs.clone();

        for vertex in counts.idle() {
            let sources: Vec<String> = arcs
                .iter()
                .filter(|e| e.destination == vertex)
                .map(|e| e.source.clone())
                .collect();
            let destinations: Vec<String> = arcs
                .iter()
                .filter(|e| e.source == vertex)
                .map(|e| e.destination.clone())
                .collect();

            arcs.retain(|e| e.source != vertex && e.destination != vertex);

            for source in &sources {
                for destination in &destinations {
                    let bridge = Edge::new(source.as_str(), destination.as_str());
                    if source != destination && !arcs.contains(&bridge) {
                        arcs.push(bridge);
                    }
                }
            }
        }

        Workflow { arcs }
    }

    pub fn vertices(&self) -> BTreeSet<&str> {
        self.arcs
            .iter()
            .flat_map(|e| [e.source.as_str(), e.destination.as_str()])
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Which template a request needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowKind {
    Create,
    Delete,
    Import,
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowKind::Create => write!(f, "create"),
            WorkflowKind::Delete => write!(f, "delete"),
            WorkflowKind::Import => write!(f, "import"),
        }
    }
}

/// Produces the workflow arcs for a set of counts
#[async_trait]
pub trait WorkflowGenerator: Send + Sync {
    async fn generate(&self, kind: WorkflowKind, counts: &WorkflowCounts) -> Result<Workflow>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Workflow {
        Workflow::new(vec![
            Edge::new("start", "creating_networks"),
            Edge::new("creating_networks", "networks_created"),
            Edge::new("networks_created", "creating_instances"),
            Edge::new("creating_instances", "instances_created"),
            Edge::new("instances_created", "end"),
        ])
    }

    #[test]
    fn test_optimize_bridges_idle_steps() {
        let mut counts = WorkflowCounts::new();
        counts.set("creating_networks", 0);
        counts.set("networks_created", 0);
        counts.set("creating_instances", 2);
        counts.set("instances_created", 2);

        let w = chain().optimize(&counts);
        assert_eq!(
            w.arcs,
            vec![
                Edge::new("creating_instances", "instances_created"),
                Edge::new("instances_created", "end"),
                Edge::new("start", "creating_instances"),
            ]
        );
        assert!(!w.vertices().contains("networks_created"));
    }

    #[test]
    fn test_optimize_all_idle() {
        let mut counts = WorkflowCounts::new();
        for v in [
            "creating_networks",
            "networks_created",
            "creating_instances",
            "instances_created",
        ] {
            counts.set(v, 0);
        }

        let w = chain().optimize(&counts);
        assert_eq!(w.arcs, vec![Edge::new("start", "end")]);
    }

    #[test]
    fn test_optimize_keeps_busy_steps() {
        let mut counts = WorkflowCounts::new();
        counts.set("creating_networks", 1);
        counts.set("networks_created", 1);

        assert_eq!(chain().optimize(&counts), chain());
    }

    #[test]
    fn test_template_json() {
        let w = Workflow::from_json(
            r#"{"arcs":[{"source":"start","destination":"creating_vpcs"}]}"#,
        )
        .unwrap();
        assert_eq!(w.arcs, vec![Edge::new("start", "creating_vpcs")]);
        assert!(Workflow::from_json("{\"arcs\": 1}").is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(WorkflowKind::Create.to_string(), "create");
        assert_eq!(WorkflowKind::Import.to_string(), "import");
    }
}
