//! Playlist to destination synchronization
//!
//! A sync copies playlist files missing from the destination, deletes
//! destination files not in the playlist, and then removes directories left
//! empty. Each attempted action is recorded so callers can see exactly what
//! happened when a run stops part way.

mod actions;
mod executor;
mod orchestrator;
mod reporting;

use serde::{Deserialize, Serialize};

pub use actions::{SyncAction, SyncPlan};
pub use orchestrator::Reconciler;
pub use reporting::SyncReporter;

/// What to do when a copy or delete fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure
    #[default]
    Abort,
    /// Attempt every action and report all failures
    Continue,
}

/// Outcome of one attempted action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// The action attempted
    pub action: SyncAction,
    /// Error message if it failed
    pub error: Option<String>,
}

impl ActionOutcome {
    /// Whether the action succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Batch report of a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncResult {
    /// Files copied to the destination
    pub copied: usize,
    /// Files deleted from the destination
    pub deleted: usize,
    /// Empty directories removed
    pub directories_removed: usize,
    /// Every attempted action, in order
    pub outcomes: Vec<ActionOutcome>,
    /// Whether the run stopped early because of a failure
    pub aborted: bool,
}

impl SyncResult {
    /// Total successful operations
    #[must_use]
    pub const fn total_operations(&self) -> usize {
        self.copied + self.deleted + self.directories_removed
    }

    /// Failed actions, in order
    pub fn failures(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Whether every attempted action succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    pub(crate) fn record_success(&mut self, action: SyncAction) {
        match action {
            SyncAction::Copy { .. } => self.copied += 1,
            SyncAction::Delete { .. } => self.deleted += 1,
            SyncAction::RemoveDirectory { .. } => self.directories_removed += 1,
        }
        self.outcomes.push(ActionOutcome {
            action,
            error: None,
        });
    }

    pub(crate) fn record_failure(&mut self, action: SyncAction, error: &dyn std::error::Error) {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        self.outcomes.push(ActionOutcome {
            action,
            error: Some(message),
        });
    }
}
