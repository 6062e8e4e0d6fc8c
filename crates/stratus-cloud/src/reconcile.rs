//! Reconciliation between a desired and a previous provisioning model
//!
//! Components are matched by their deterministic name. A match whose
//! type-specific [`Reconcilable::has_changed`] predicate holds becomes an
//! update; components only present in the previous model are deleted.

use crate::component::{Component, find_by_name};
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// A provisioning component that can take part in reconciliation
pub trait Reconcilable: Component + Clone {
    /// Whether an in-place update is needed to go from `previous` to `self`.
    ///
    /// Immutable resources always answer `false`. A same-named component
    /// whose fields differ is left as it is; replacing it takes a new name,
    /// which reconciles as a delete plus a create.
    fn has_changed(&self, previous: &Self) -> bool;

    /// Copy provider-assigned data (ids, endpoints, status) from the live
    /// component with the same name.
    fn inherit(&mut self, previous: &Self);

    fn status(&self) -> Status;

    fn set_status(&mut self, status: Status);
}

/// One resource collection of the provisioning model with its operation sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "C: Deserialize<'de>"))]
pub struct Resources<C> {
    pub items: Vec<C>,
    pub to_create: Vec<C>,
    pub to_update: Vec<C>,
    pub to_delete: Vec<C>,
}

impl<C> Default for Resources<C> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            to_create: Vec::new(),
            to_update: Vec::new(),
            to_delete: Vec::new(),
        }
    }
}

/// The four disjoint sets computed for one resource type
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<C> {
    pub to_create: Vec<C>,
    pub to_update: Vec<C>,
    pub to_delete: Vec<C>,
    pub unchanged: Vec<C>,
}

impl<C> Default for Partition<C> {
    fn default() -> Self {
        Self {
            to_create: Vec::new(),
            to_update: Vec::new(),
            to_delete: Vec::new(),
            unchanged: Vec::new(),
        }
    }
}

impl<C: Reconcilable> Partition<C> {
    /// Partition `desired` against `previous`.
    ///
    /// Previously scheduled updates that never reached `completed` are
    /// scheduled again even when nothing changed since.
    pub fn compute(desired: &[C], previous: &Resources<C>) -> Self {
        let mut partition = Partition::default();

        for component in desired {
            let name = component.component_name();
            match find_by_name(&previous.items, name) {
                None => partition.to_create.push(component.clone()),
                Some(old) if component.has_changed(old) => {
                    partition.to_update.push(component.clone())
                }
                Some(_) => {
                    let pending = find_by_name(&previous.to_update, name)
                        .is_some_and(|u| !u.status().is_completed());
                    if pending {
                        partition.to_update.push(component.clone());
                    } else {
                        partition.unchanged.push(component.clone());
                    }
                }
            }
        }

        for old in &previous.items {
            if find_by_name(desired, old.component_name()).is_none() {
                partition.to_delete.push(old.clone());
            }
        }

        partition
    }

    pub fn has_changes(&self) -> bool {
        !(self.to_create.is_empty() && self.to_update.is_empty() && self.to_delete.is_empty())
    }
}

impl<C: Reconcilable> Resources<C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Copy provider data from same-named components of `previous`
    pub fn inherit(&mut self, previous: &Resources<C>) {
        for item in &mut self.items {
            if let Some(old) = find_by_name(&previous.items, item.component_name()) {
                item.inherit(old);
            }
        }
    }

    /// Diff against `previous`, storing the operation sets on `self`
    pub fn reconcile(&mut self, previous: &Resources<C>) -> Partition<C> {
        let partition = Partition::compute(&self.items, previous);
        self.to_create = partition.to_create.clone();
        self.to_update = partition.to_update.clone();
        self.to_delete = partition.to_delete.clone();
        partition
    }

    /// Schedule every component for deletion, resetting its status
    pub fn mark_all_for_deletion(&mut self) {
        self.to_create.clear();
        self.to_update.clear();
        self.to_delete = self
            .items
            .iter()
            .cloned()
            .map(|mut c| {
                c.set_status(Status::Pending);
                c
            })
            .collect();
    }

    pub fn find(&self, name: &str) -> Option<&C> {
        find_by_name(&self.items, name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.to_create.is_empty()
            && self.to_update.is_empty()
            && self.to_delete.is_empty()
    }
}
