//! File operations executor

use std::fs;
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use super::actions::SyncAction;
use crate::error::{PlaylistError, Result};
use crate::manifest::paths;

/// Performs sync actions against the filesystem
pub struct FileOperationExecutor;

impl FileOperationExecutor {
    /// Execute a single sync action
    ///
    /// # Errors
    ///
    /// Returns an error if the file operation fails or a copy would land
    /// outside the destination.
    pub fn execute(action: &SyncAction) -> Result<()> {
        match action {
            SyncAction::Copy {
                entry,
                key,
                source,
                dest,
            } => {
                if !paths::is_contained(key) {
                    return Err(PlaylistError::EscapesDestination {
                        entry: entry.clone(),
                    });
                }
                Self::copy_file(source, dest)
            }
            SyncAction::Delete { path, .. } => {
                fs::remove_file(path).map_err(|source| PlaylistError::Remove {
                    path: path.clone(),
                    source,
                })
            }
            SyncAction::RemoveDirectory { path } => {
                fs::remove_dir(path).map_err(|source| PlaylistError::RemoveDirectory {
                    path: path.clone(),
                    source,
                })
            }
        }
    }

    /// Copy a file, creating its parent directories first
    ///
    /// A failed copy leaves nothing behind at `dest`.
    fn copy_file(source: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| PlaylistError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        if let Err(e) = fs::copy(source, dest) {
            // A partial file would count as present on the next run
            if dest.is_file() {
                if let Err(cleanup) = fs::remove_file(dest) {
                    warn!(path = %dest.display(), error = %cleanup, "could not remove partial copy");
                }
            }
            return Err(PlaylistError::Copy {
                from: source.to_path_buf(),
                to: dest.to_path_buf(),
                source: e,
            });
        }

        Ok(())
    }

    /// Remove every empty directory below `root`, deepest first
    ///
    /// Emptiness is checked when a directory is reached, after its children
    /// have been handled, so a chain of parents that only held empty
    /// directories collapses in one pass. `root` itself is kept and symlinked
    /// directories are never entered.
    ///
    /// `on_removal` is told about every attempted removal, and about every
    /// directory that could not be read, and decides whether to keep going.
    /// An unreadable directory is skipped and the rest of the tree is still
    /// pruned.
    pub fn prune_empty_directories<F>(root: &Path, mut on_removal: F)
    where
        F: FnMut(SyncAction, Result<()>) -> bool,
    {
        if !root.is_dir() {
            return;
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .contents_first(true);

        for entry in walker {
            let (action, result) = match entry {
                Ok(entry) if !entry.file_type().is_dir() => continue,
                Ok(entry) => {
                    let path = entry.into_path();
                    match Self::is_empty_dir(&path) {
                        Ok(false) => continue,
                        Ok(true) => {
                            let action = SyncAction::RemoveDirectory { path };
                            let result = Self::execute(&action);
                            (action, result)
                        }
                        Err(e) => (SyncAction::RemoveDirectory { path }, Err(e)),
                    }
                }
                Err(source) => {
                    let path = source.path().unwrap_or(root).to_path_buf();
                    let error = PlaylistError::Scan {
                        path: path.clone(),
                        source,
                    };
                    (SyncAction::RemoveDirectory { path }, Err(error))
                }
            };

            if !on_removal(action, result) {
                break;
            }
        }
    }

    fn is_empty_dir(path: &Path) -> Result<bool> {
        let mut entries = fs::read_dir(path).map_err(|source| PlaylistError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(entries.next().is_none())
    }
}
