//! Reading and writing playlist files
//!
//! The format is one entry per line. Lines starting with `#` are comments and
//! blank lines are ignored; neither survives a load/save cycle.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::PathManifest;
use crate::error::{PlaylistError, Result};

/// Loads and saves [`PathManifest`]s as flat text files
pub struct ManifestStore;

impl ManifestStore {
    /// Load a playlist file, anchoring its entries at `base_path`
    ///
    /// A missing file yields an empty manifest so the first `add` can create
    /// it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read as UTF-8.
    pub fn load(file_path: &Path, base_path: &Path) -> Result<PathManifest> {
        let mut manifest = PathManifest::new(base_path);

        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %file_path.display(), "playlist does not exist yet");
                return Ok(manifest);
            }
            Err(source) => {
                return Err(PlaylistError::ManifestRead {
                    path: file_path.to_path_buf(),
                    source,
                });
            }
        };

        manifest.extend(Self::parse(&content));
        debug!(
            path = %file_path.display(),
            entries = manifest.len(),
            "loaded playlist"
        );
        Ok(manifest)
    }

    /// Write every entry, in order, one per line
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(manifest: &PathManifest, file_path: &Path) -> Result<()> {
        fs::write(file_path, Self::render(manifest)).map_err(|source| {
            PlaylistError::ManifestWrite {
                path: file_path.to_path_buf(),
                source,
            }
        })?;

        debug!(
            path = %file_path.display(),
            entries = manifest.len(),
            "saved playlist"
        );
        Ok(())
    }

    fn parse(content: &str) -> impl Iterator<Item = String> + '_ {
        content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
    }

    fn render(manifest: &PathManifest) -> String {
        manifest
            .entries()
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let manifest =
            ManifestStore::load(&tmp.path().join("nope.m3u"), Path::new("/music")).unwrap();

        assert!(manifest.is_empty());
        assert_eq!(manifest.base_path(), Path::new("/music"));
    }

    #[test]
    fn test_load_skips_comments_and_blank_lines() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("list.m3u");
        fs::write(
            &file,
            "#EXTM3U\na.mp3\n\n  # indented is not a comment\nsub/b.mp3   \r\n# trailing\n",
        )
        .unwrap();

        let manifest = ManifestStore::load(&file, tmp.path()).unwrap();

        assert_eq!(
            manifest.entries(),
            ["a.mp3", "  # indented is not a comment", "sub/b.mp3"]
        );
    }

    #[test]
    fn test_load_preserves_duplicates_and_order() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("list.m3u");
        fs::write(&file, "z.mp3\na.mp3\nz.mp3\n").unwrap();

        let manifest = ManifestStore::load(&file, tmp.path()).unwrap();

        assert_eq!(manifest.entries(), ["z.mp3", "a.mp3", "z.mp3"]);
    }

    #[test]
    fn test_save_writes_one_entry_per_line() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("list.m3u");
        let manifest = PathManifest::with_entries(tmp.path(), ["b.mp3", "a.mp3", "b.mp3"]);

        ManifestStore::save(&manifest, &file).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "b.mp3\na.mp3\nb.mp3\n");
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("list.m3u");
        fs::write(&file, "# old\nold.mp3\nolder.mp3\n").unwrap();

        let manifest = PathManifest::with_entries(tmp.path(), ["new.mp3"]);
        ManifestStore::save(&manifest, &file).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "new.mp3\n");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("list.m3u");
        let original = PathManifest::with_entries(
            tmp.path(),
            ["rock/a.mp3", "../outside/b.mp3", "jazz/c d.mp3", "rock/a.mp3"],
        );

        ManifestStore::save(&original, &file).unwrap();
        let loaded = ManifestStore::load(&file, tmp.path()).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_comments_do_not_survive_round_trip() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("list.m3u");
        fs::write(&file, "# my mix\na.mp3\n").unwrap();

        let manifest = ManifestStore::load(&file, tmp.path()).unwrap();
        ManifestStore::save(&manifest, &file).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "a.mp3\n");
    }

    #[test]
    fn test_load_unreadable_path_is_error() {
        let tmp = TempDir::new().unwrap();

        // A directory exists but cannot be read as a file
        let result = ManifestStore::load(tmp.path(), tmp.path());

        assert!(matches!(result, Err(PlaylistError::ManifestRead { .. })));
    }
}
