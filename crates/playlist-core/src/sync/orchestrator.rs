//! Sync orchestration - diffs a playlist against a destination and applies it

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use super::actions::{SyncAction, SyncPlan};
use super::executor::FileOperationExecutor;
use super::{FailurePolicy, SyncResult};
use crate::error::Result;
use crate::manifest::{PathManifest, paths};
use crate::scanner::DirectoryScanner;

/// Reconciles a destination directory with a playlist
///
/// Files are compared by relative path only. A destination file whose path
/// is in the playlist is never touched, even if its content differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    scanner: DirectoryScanner,
    policy: FailurePolicy,
}

impl Reconciler {
    /// Create a new reconciler
    #[must_use]
    pub const fn new(scanner: DirectoryScanner, policy: FailurePolicy) -> Self {
        Self { scanner, policy }
    }

    /// Work out which files to copy and which to delete
    ///
    /// Copies follow playlist order with duplicate entries collapsed;
    /// deletions follow destination walk order. Destination files whose
    /// names are not valid UTF-8 can never be named by an entry, so they are
    /// always deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be scanned.
    pub fn plan(&self, manifest: &PathManifest, destination: &Path) -> Result<SyncPlan> {
        let listing = self.scanner.list_keyed(destination)?;
        let present: HashSet<&str> = listing.iter().filter_map(|f| f.key.as_deref()).collect();

        let mut wanted = HashSet::new();
        let mut copies = Vec::new();
        for entry in manifest.entries() {
            let key = paths::entry_key(entry);
            if !wanted.insert(key.clone()) || present.contains(key.as_str()) {
                continue;
            }
            copies.push(SyncAction::Copy {
                entry: entry.clone(),
                source: manifest.resolve(entry),
                dest: destination.join(&key),
                key,
            });
        }

        let mut deletions = Vec::new();
        for file in &listing {
            let entry = match &file.key {
                Some(key) if wanted.contains(key) => continue,
                Some(key) => key.clone(),
                None => {
                    warn!(path = %file.path.display(), "file name is not valid UTF-8");
                    file.path.to_string_lossy().into_owned()
                }
            };
            deletions.push(SyncAction::Delete {
                entry,
                path: file.path.clone(),
            });
        }

        info!(
            destination = %destination.display(),
            copies = copies.len(),
            deletions = deletions.len(),
            "planned sync"
        );

        Ok(SyncPlan::new(destination.to_path_buf(), copies, deletions))
    }

    /// Perform a plan: copies, then deletions, then empty directory pruning
    ///
    /// Every attempted action is recorded in the result. Under
    /// [`FailurePolicy::Abort`] the first failure stops the run and pruning is
    /// skipped.
    #[must_use]
    pub fn apply(&self, plan: &SyncPlan) -> SyncResult {
        let mut result = SyncResult::default();

        for action in plan.copies().iter().chain(plan.deletions()) {
            debug!(%action, "applying");
            let outcome = FileOperationExecutor::execute(action);
            if !self.record(&mut result, action.clone(), outcome) {
                return result;
            }
        }

        FileOperationExecutor::prune_empty_directories(plan.destination(), |action, outcome| {
            self.record(&mut result, action, outcome)
        });

        result
    }

    /// Plan and apply in one step
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be scanned. Failures of
    /// individual actions are reported in the [`SyncResult`].
    pub fn sync(&self, manifest: &PathManifest, destination: &Path) -> Result<SyncResult> {
        let plan = self.plan(manifest, destination)?;
        Ok(self.apply(&plan))
    }

    /// Record an outcome; returns whether to continue
    fn record(&self, result: &mut SyncResult, action: SyncAction, outcome: Result<()>) -> bool {
        match outcome {
            Ok(()) => {
                result.record_success(action);
                true
            }
            Err(e) => {
                warn!(%action, error = %e, "sync action failed");
                result.record_failure(action, &e);
                if self.policy == FailurePolicy::Abort {
                    result.aborted = true;
                    return false;
                }
                true
            }
        }
    }
}
