//! Planned actions derived from a reconciled provisioning model

use crate::component::Component;
use crate::reconcile::Resources;
use serde::{Deserialize, Serialize};

/// Represents a planned action on one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Unique identifier for the action
    pub id: String,

    pub action_type: ActionType,

    /// Collection the component belongs to (e.g. "networks", "elbs")
    pub resource_type: String,

    /// Component name
    pub resource_id: String,

    pub description: String,
}

/// Type of action to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Create,
    Update,
    Delete,
    /// No changes needed
    NoOp,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::Create => write!(f, "create"),
            ActionType::Update => write!(f, "update"),
            ActionType::Delete => write!(f, "delete"),
            ActionType::NoOp => write!(f, "no-op"),
        }
    }
}

impl Action {
    pub fn new(action_type: ActionType, resource_type: &str, resource_id: &str) -> Self {
        Self {
            id: format!("{}:{}:{}", action_type, resource_type, resource_id),
            action_type,
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
            description: format!("{} {} {}", action_type, resource_type, resource_id),
        }
    }

    /// Actions for one collection: creates, updates, deletes, then unchanged
    pub fn for_resources<C: Component>(resource_type: &str, resources: &Resources<C>) -> Vec<Action> {
        let scheduled = |name: &str| {
            resources
                .to_create
                .iter()
                .chain(&resources.to_update)
                .any(|c| c.component_name() == name)
        };

        let create = resources
            .to_create
            .iter()
            .map(|c| (ActionType::Create, c.component_name()));
        let update = resources
            .to_update
            .iter()
            .map(|c| (ActionType::Update, c.component_name()));
        let delete = resources
            .to_delete
            .iter()
            .map(|c| (ActionType::Delete, c.component_name()));
        let unchanged = resources
            .items
            .iter()
            .map(Component::component_name)
            .filter(|&name| !scheduled(name))
            .map(|name| (ActionType::NoOp, name));

        create
            .chain(update)
            .chain(delete)
            .chain(unchanged)
            .map(|(action_type, name)| Action::new(action_type, resource_type, name))
            .collect()
    }
}

/// Plan containing all actions to be applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub actions: Vec<Action>,

    /// Whether the plan has any changes
    pub has_changes: bool,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        let has_changes = actions.iter().any(|a| a.action_type != ActionType::NoOp);
        Self {
            actions,
            has_changes,
        }
    }

    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            has_changes: false,
        }
    }

    /// Get actions by type
    pub fn actions_by_type(&self, action_type: ActionType) -> Vec<&Action> {
        self.actions
            .iter()
            .filter(|a| a.action_type == action_type)
            .collect()
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            create: self.actions_by_type(ActionType::Create).len(),
            update: self.actions_by_type(ActionType::Update).len(),
            delete: self.actions_by_type(ActionType::Delete).len(),
            no_change: self.actions_by_type(ActionType::NoOp).len(),
        }
    }
}

/// Summary of planned actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub no_change: usize,
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to create, {} to update, {} to delete, {} unchanged",
            self.create, self.update, self.delete, self.no_change
        )
    }
}
