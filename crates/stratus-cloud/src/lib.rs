//! Stratus Cloud
//!
//! The provider-addressable side of Stratus. A [`ProvisioningModel`] holds
//! flat per-type collections of concrete components, each with a
//! deterministic name, tags, a provider id and [`Deferred`] references to
//! other components.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  stratus-cloud                    │
//! │  ┌────────────────────────────────────────────┐  │
//! │  │  Component Abstraction                     │  │
//! │  │  trait Component { tags, provider_id, .. } │  │
//! │  └────────────────────────────────────────────┘  │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────┐  │
//! │  │ Reconcile    │ │ Workflow     │ │ Model    │  │
//! │  │ (diff)       │ │ counts/plan  │ │ store    │  │
//! │  └──────────────┘ └──────────────┘ └──────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod action;
pub mod component;
pub mod deferred;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod status;
pub mod store;
pub mod workflow;

// Re-exports
pub use action::{Action, ActionType, Plan, PlanSummary};
pub use component::Component;
pub use deferred::{Deferred, Reference, Selector};
pub use error::{CloudError, Result};
pub use model::*;
pub use reconcile::{Partition, Reconcilable, Resources};
pub use status::Status;
pub use store::{FileStore, MemoryStore, ModelStore, with_timeout};
pub use workflow::{Edge, Workflow, WorkflowCounts, WorkflowGenerator, WorkflowKind};
