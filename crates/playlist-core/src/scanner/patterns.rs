//! Expansion of `add` arguments into files
//!
//! A directory argument contributes every audio file beneath it. Anything
//! else is a glob (`*`, `?`, `[..]`, `**`) matched against files on disk.
//! Patterns that match nothing contribute nothing.

use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use super::DirectoryScanner;
use crate::error::{PlaylistError, Result};

/// Audio extensions added from directories when nothing else is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["mp3"];

// Braces are plain characters here, not alternations
const GLOB_META: &[char] = &['*', '?', '['];

/// Turns directory and glob arguments into file paths
#[derive(Debug, Clone)]
pub struct PatternExpander {
    scanner: DirectoryScanner,
    extensions: Vec<String>,
}

impl PatternExpander {
    /// Create an expander that adds files with `extensions` from directories
    #[must_use]
    pub fn new(scanner: DirectoryScanner, extensions: Vec<String>) -> Self {
        Self {
            scanner,
            extensions,
        }
    }

    /// Expand a single pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob or a directory
    /// walk fails.
    pub fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let path = Path::new(pattern);

        if path.is_dir() {
            return self.expand_directory(path);
        }

        if !pattern.contains(GLOB_META) {
            return Ok(if path.is_file() {
                vec![path.to_path_buf()]
            } else {
                Vec::new()
            });
        }

        self.expand_glob(pattern)
    }

    fn expand_directory(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .scanner
            .list_files(dir)?
            .into_iter()
            .filter(|path| self.has_audio_extension(path))
            .collect())
    }

    fn has_audio_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn expand_glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let matcher = Self::compile(pattern)?;
        let (prefix, remainder) = Self::split_literal_prefix(Path::new(pattern));

        // Without `**` nothing deeper than the pattern itself can match
        let max_depth = if pattern.contains("**") {
            None
        } else {
            Some(remainder)
        };

        let root = if prefix.as_os_str().is_empty() {
            Path::new(".")
        } else {
            prefix.as_path()
        };

        let mut matches: Vec<PathBuf> = self
            .scanner
            .walk_files(root, max_depth)?
            .into_iter()
            .filter_map(|path| {
                let rel = path.strip_prefix(root).ok()?;
                let candidate = prefix.join(rel);
                matcher.is_match(&candidate).then_some(candidate)
            })
            .collect();

        matches.sort();
        Ok(matches)
    }

    fn compile(pattern: &str) -> Result<GlobMatcher> {
        GlobBuilder::new(&Self::escape_braces(pattern))
            .literal_separator(true)
            .build()
            .map(|glob| glob.compile_matcher())
            .map_err(|source| PlaylistError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Wrap `{` and `}` outside character classes in classes of their own
    fn escape_braces(pattern: &str) -> String {
        let mut escaped = String::with_capacity(pattern.len());
        let mut in_class = false;
        for c in pattern.chars() {
            match c {
                '[' if !in_class => {
                    in_class = true;
                    escaped.push(c);
                }
                ']' if in_class => {
                    in_class = false;
                    escaped.push(c);
                }
                '{' | '}' if !in_class => {
                    escaped.push('[');
                    escaped.push(c);
                    escaped.push(']');
                }
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Leading components free of glob syntax, and how many components follow
    fn split_literal_prefix(pattern: &Path) -> (PathBuf, usize) {
        let mut prefix = PathBuf::new();
        let mut components = pattern.components().peekable();

        while let Some(component) = components.peek() {
            let literal = match component {
                Component::Normal(part) => !part.to_string_lossy().contains(GLOB_META),
                _ => true,
            };
            if !literal {
                break;
            }
            prefix.push(component);
            components.next();
        }

        (prefix, components.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn expander() -> PatternExpander {
        PatternExpander::new(
            DirectoryScanner::default(),
            DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        )
    }

    fn touch(dir: &Path, rel_path: &str) {
        let path = dir.join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_split_literal_prefix() {
        let (prefix, rest) = PatternExpander::split_literal_prefix(Path::new("music/rock/*.mp3"));
        assert_eq!(prefix, PathBuf::from("music/rock"));
        assert_eq!(rest, 1);

        let (prefix, rest) = PatternExpander::split_literal_prefix(Path::new("*/b/*.mp3"));
        assert_eq!(prefix, PathBuf::new());
        assert_eq!(rest, 3);
    }

    #[test]
    fn test_directory_adds_only_audio_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "album/01.mp3");
        touch(tmp.path(), "album/cover.jpg");
        touch(tmp.path(), "album/disc2/01.mp3");

        let files = expander().expand(tmp.path().to_str().unwrap()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "mp3"));
    }

    #[test]
    fn test_directory_respects_configured_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp3");
        touch(tmp.path(), "b.flac");

        let expander = PatternExpander::new(
            DirectoryScanner::default(),
            vec!["flac".to_string()],
        );
        let files = expander.expand(tmp.path().to_str().unwrap()).unwrap();

        assert_eq!(files, vec![tmp.path().join("b.flac")]);
    }

    #[test]
    fn test_glob_does_not_cross_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp3");
        touch(tmp.path(), "b.ogg");
        touch(tmp.path(), "sub/c.mp3");

        let pattern = format!("{}/*.mp3", tmp.path().display());
        let files = expander().expand(&pattern).unwrap();

        assert_eq!(files, vec![tmp.path().join("a.mp3")]);
    }

    #[test]
    fn test_recursive_glob() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp3");
        touch(tmp.path(), "sub/deeper/c.mp3");

        let pattern = format!("{}/**/*.mp3", tmp.path().display());
        let files = expander().expand(&pattern).unwrap();

        assert_eq!(
            files,
            vec![tmp.path().join("a.mp3"), tmp.path().join("sub/deeper/c.mp3")]
        );
    }

    #[test]
    fn test_literal_file_pattern() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "notes.txt");
        let file = tmp.path().join("notes.txt");

        let files = expander().expand(file.to_str().unwrap()).unwrap();

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let tmp = TempDir::new().unwrap();

        let missing = tmp.path().join("missing.mp3");
        assert!(expander().expand(missing.to_str().unwrap()).unwrap().is_empty());

        let pattern = format!("{}/*.wav", tmp.path().display());
        assert!(expander().expand(&pattern).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_glob_is_error() {
        let result = expander().expand("music/[unclosed");
        assert!(matches!(result, Err(PlaylistError::InvalidPattern { .. })));
    }

    #[test]
    fn test_braces_are_literal() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "song{1}.mp3");
        touch(tmp.path(), "song1.mp3");
        let file = tmp.path().join("song{1}.mp3");

        let literal = expander().expand(file.to_str().unwrap()).unwrap();
        assert_eq!(literal, vec![file.clone()]);

        let pattern = format!("{}/*{{1}}.mp3", tmp.path().display());
        assert_eq!(expander().expand(&pattern).unwrap(), vec![file]);
    }

    #[test]
    fn test_escape_braces_leaves_classes_alone() {
        assert_eq!(PatternExpander::escape_braces("a{b}"), "a[{]b[}]");
        assert_eq!(PatternExpander::escape_braces("[{]x"), "[{]x");
    }
}
