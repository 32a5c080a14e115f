//! Playlist manifest: an ordered list of paths relative to a base directory
//!
//! Entries are stored relative so the same playlist file works wherever the
//! music library is mounted; the base directory anchors them at runtime.

pub mod paths;
mod store;

use std::fs;
use std::path::{Path, PathBuf};

pub use store::ManifestStore;

use crate::error::{PlaylistError, Result};

/// Ordered collection of playlist entries anchored at a base directory
///
/// Duplicate entries are allowed and kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathManifest {
    base_path: PathBuf,
    entries: Vec<String>,
}

impl PathManifest {
    /// Create an empty manifest anchored at `base_path`
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            entries: Vec::new(),
        }
    }

    /// Create a manifest from already-relative entries
    #[must_use]
    pub fn with_entries<I, S>(base_path: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_path: base_path.into(),
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Directory entries are relative to
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Add a file, given relative to the current directory or absolute
    ///
    /// The file does not have to exist; use [`Self::find_missing`] to check.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be expressed relative to the base.
    pub fn add(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let entry = paths::relative_to(path.as_ref(), &self.base_path)?;
        self.entries.push(entry);
        Ok(())
    }

    pub(crate) fn extend<I: IntoIterator<Item = String>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    /// Entries in playlist order
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join an entry onto the base path without making it absolute
    #[must_use]
    pub fn resolve(&self, entry: &str) -> PathBuf {
        self.base_path.join(entry)
    }

    /// Absolute, normalised path of every entry
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn resolved_paths(&self) -> Result<Vec<PathBuf>> {
        self.entries
            .iter()
            .map(|entry| paths::absolute(&self.resolve(entry)))
            .collect()
    }

    /// Resolved paths that do not exist, in playlist order
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn find_missing(&self) -> Result<Vec<PathBuf>> {
        Ok(self
            .resolved_paths()?
            .into_iter()
            .filter(|path| !path.exists())
            .collect())
    }

    /// Total size in bytes of every entry
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::FileAccess`] for the first entry that is
    /// missing or unreadable.
    pub fn total_size(&self) -> Result<u64> {
        let mut total = 0u64;
        for path in self.resolved_paths()? {
            let metadata = fs::metadata(&path)
                .map_err(|source| PlaylistError::FileAccess { path, source })?;
            total += metadata.len();
        }
        Ok(total)
    }
}
