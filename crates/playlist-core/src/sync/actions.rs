//! Sync actions and the plan that orders them

use std::fmt;
use std::path::{Path, PathBuf};

/// A single filesystem change made while syncing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Copy a playlist file onto the destination
    Copy {
        /// Playlist entry, as written in the playlist
        entry: String,
        /// Normalised relative path under the destination
        key: String,
        /// File to read, the entry joined onto the base path
        source: PathBuf,
        /// File to write
        dest: PathBuf,
    },
    /// Delete a destination file that is not in the playlist
    Delete {
        /// Path relative to the destination root
        entry: String,
        /// File to delete
        path: PathBuf,
    },
    /// Remove a destination directory left empty
    RemoveDirectory {
        /// Directory to remove
        path: PathBuf,
    },
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy { source, dest, .. } => {
                write!(f, "copy {} -> {}", source.display(), dest.display())
            }
            Self::Delete { path, .. } => write!(f, "remove {}", path.display()),
            Self::RemoveDirectory { path } => write!(f, "remove directory {}", path.display()),
        }
    }
}

/// Copies and deletions needed to make a destination match a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    destination: PathBuf,
    copies: Vec<SyncAction>,
    deletions: Vec<SyncAction>,
}

impl SyncPlan {
    pub(crate) fn new(
        destination: PathBuf,
        copies: Vec<SyncAction>,
        deletions: Vec<SyncAction>,
    ) -> Self {
        Self {
            destination,
            copies,
            deletions,
        }
    }

    /// Destination root the plan applies to
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Copies, in playlist order
    #[must_use]
    pub fn copies(&self) -> &[SyncAction] {
        &self.copies
    }

    /// Deletions, in destination walk order
    #[must_use]
    pub fn deletions(&self) -> &[SyncAction] {
        &self.deletions
    }

    /// Whether the destination already matches the playlist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.copies.is_empty() && self.deletions.is_empty()
    }
}
