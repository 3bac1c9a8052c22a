//! Drag-Reorder Handler
//!
//! Resolves a finished drag into a store mutation (or none).

use crate::items::ItemStore;

/// A finished drag: where the row came from and where it was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub source: usize,
    /// None when the drag was released outside any drop target
    pub destination: Option<usize>,
}

/// What a drop did to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// No valid destination, list untouched
    Cancelled,
    /// Dropped back where it started
    Unchanged,
    Moved { from: usize, to: usize },
}

impl DragEnd {
    /// Decide the outcome for a list of `len` items without touching it
    pub fn resolve(&self, len: usize) -> DropOutcome {
        match self.destination {
            Some(to) if self.source < len && to < len => {
                if to == self.source {
                    DropOutcome::Unchanged
                } else {
                    DropOutcome::Moved { from: self.source, to }
                }
            }
            _ => DropOutcome::Cancelled,
        }
    }

    /// Apply to the store. Only `Moved` mutates.
    pub fn apply(&self, items: &mut ItemStore) -> DropOutcome {
        let outcome = self.resolve(items.len());
        if let DropOutcome::Moved { from, to } = outcome {
            items.reorder(from, Some(to));
        }
        outcome
    }
}

impl From<leptos_dragdrop::DragRelease> for DragEnd {
    fn from(release: leptos_dragdrop::DragRelease) -> Self {
        Self {
            source: release.source,
            destination: release.destination(),
        }
    }
}
