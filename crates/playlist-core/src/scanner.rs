//! Directory scanning
//!
//! The same [`ScanOptions`] drive both the discovery of files to add and the
//! scan of a sync destination, so the two never disagree about symlinks.

mod patterns;


use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

pub use patterns::{DEFAULT_EXTENSIONS, PatternExpander};

use crate::error::{PlaylistError, Result};

/// Options shared by every directory walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into symlinked directories
    pub follow_symlinks: bool,
}

/// A file found below a scanned root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    /// Full path of the file
    pub path: PathBuf,
    /// Path relative to the root joined with `/`; `None` when a component
    /// is not valid UTF-8, so no playlist entry can name it
    pub key: Option<String>,
}

/// Recursive lister of files
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScanner {
    options: ScanOptions,
}

impl DirectoryScanner {
    /// Create a scanner with the given options
    #[must_use]
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Every file under `root`, relative to it and joined with `/`
    ///
    /// A missing `root` yields an empty listing. Names that are not valid
    /// UTF-8 are rendered lossily.
    ///
    /// # Errors
    ///
    /// Returns an error if the walk fails.
    pub fn list_relative(&self, root: &Path) -> Result<Vec<String>> {
        Ok(self
            .list_keyed(root)?
            .into_iter()
            .map(|file| {
                file.key
                    .unwrap_or_else(|| Self::display_key(root, &file.path))
            })
            .collect())
    }

    /// Every file under `root` with its comparison key
    ///
    /// # Errors
    ///
    /// Returns an error if the walk fails.
    pub fn list_keyed(&self, root: &Path) -> Result<Vec<ListedFile>> {
        Ok(self
            .list_files(root)?
            .into_iter()
            .map(|path| ListedFile {
                key: Self::relative_key(root, &path),
                path,
            })
            .collect())
    }

    /// Every file under `root`, as full paths
    ///
    /// # Errors
    ///
    /// Returns an error if the walk fails.
    pub fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.walk_files(root, None)
    }

    /// Files under `root` no deeper than `max_depth` levels below it
    pub(crate) fn walk_files(&self, root: &Path, max_depth: Option<usize>) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        let mut walker = WalkDir::new(root)
            .follow_links(self.options.follow_symlinks)
            .sort_by_file_name();
        if let Some(depth) = max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if Self::is_listed_file(&entry) {
                        files.push(entry.into_path());
                    }
                }
                // Followed links that dangle or loop are still files to list
                Err(err) if Self::is_broken_link(&err) => {
                    if let Some(path) = err.path() {
                        files.push(path.to_path_buf());
                    }
                }
                Err(source) => {
                    return Err(PlaylistError::Scan {
                        path: root.to_path_buf(),
                        source,
                    });
                }
            }
        }

        Ok(files)
    }

    /// Anything that is not a directory
    ///
    /// When links are not followed, a symlink is listed unless it points at
    /// a directory, so dangling links show up and can be removed.
    fn is_listed_file(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return false;
        }
        !(file_type.is_symlink() && entry.path().is_dir())
    }

    fn is_broken_link(err: &walkdir::Error) -> bool {
        err.path()
            .is_some_and(|path| path.is_symlink() && !path.exists())
    }

    /// `/`-joined path below `root`, or `None` if a component is not UTF-8
    fn relative_key(root: &Path, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(root).unwrap_or(path);
        let parts = rel
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;
        Some(parts.join("/"))
    }

    fn display_key(root: &Path, path: &Path) -> String {
        let rel = path.strip_prefix(root).unwrap_or(path);
        rel.components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let scanner = DirectoryScanner::default();

        let listing = scanner.list_relative(&tmp.path().join("absent")).unwrap();

        assert!(listing.is_empty());
    }

    #[test]
    fn test_directories_are_not_listed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("empty/nested")).unwrap();
        fs::write(tmp.path().join("song.mp3"), "x").unwrap();

        let listing = DirectoryScanner::default().list_relative(tmp.path()).unwrap();

        assert_eq!(listing, vec!["song.mp3".to_string()]);
    }

    #[test]
    fn test_root_file_is_listed_by_name() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("single.mp3");
        fs::write(&file, "x").unwrap();

        let files = DirectoryScanner::default().list_files(&file).unwrap();

        assert_eq!(files, vec![file]);
    }
}
