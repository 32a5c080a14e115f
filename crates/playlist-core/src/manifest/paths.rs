//! Lexical path helpers
//!
//! Playlist entries are compared as strings, so paths are normalised without
//! touching the filesystem: `.` components are dropped and `..` pops the
//! previous component. Symlinks are never resolved.

use std::path::{Component, Path, PathBuf};

use crate::error::{PlaylistError, Result};

/// Make `path` absolute against the current directory and normalise it
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(PlaylistError::CurrentDir)?
            .join(path)
    };

    Ok(dunce::simplified(&normalize(&joined)).to_path_buf())
}

/// Remove `.` and resolve `..` components lexically
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().collect()
}

/// Express `path` relative to `base`, joined with `/`
///
/// Both paths are made absolute first, so either may be relative to the
/// current directory. A path equal to `base` yields `"."`.
///
/// # Errors
///
/// Returns an error if the current directory is unavailable, the result is
/// not valid UTF-8, or the two paths do not share a root.
pub fn relative_to(path: &Path, base: &Path) -> Result<String> {
    let path = absolute(path)?;
    let base = absolute(base)?;

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    if path_parts.first() != base_parts.first() {
        return Err(PlaylistError::NoCommonRoot { path, base });
    }

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..base_parts.len() {
        parts.push("..");
    }
    for component in &path_parts[common..] {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| PlaylistError::NonUtf8Path(path.clone()))?;
        parts.push(part);
    }

    if parts.is_empty() {
        return Ok(".".to_string());
    }
    Ok(parts.join("/"))
}

/// Comparison key for a playlist entry: normalised and joined with `/`
///
/// Keys line up with the `/`-joined listings produced by the scanner, so
/// `./a.mp3` and `a.mp3` name the same destination file. Absolute entries are
/// returned unchanged.
#[must_use]
pub fn entry_key(entry: &str) -> String {
    let normalized = normalize(Path::new(entry));
    let mut parts = Vec::new();
    for component in normalized.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            Component::ParentDir => parts.push("..".into()),
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return entry.to_string(),
        }
    }
    parts.join("/")
}

/// Whether a relative entry stays inside the directory it is joined to
#[must_use]
pub fn is_contained(entry: &str) -> bool {
    let mut depth = 0usize;
    for component in Path::new(entry).components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    depth > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_removes_dots() {
        assert_eq!(
            normalize(Path::new("/music/./rock/../jazz/a.mp3")),
            PathBuf::from("/music/jazz/a.mp3")
        );
    }

    #[test]
    fn test_normalize_keeps_leading_parent_on_relative() {
        assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_parent_above_root() {
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    #[cfg(unix)]
    fn test_relative_to_child() {
        let rel = relative_to(Path::new("/music/rock/a.mp3"), Path::new("/music")).unwrap();
        assert_eq!(rel, "rock/a.mp3");
    }

    #[test]
    #[cfg(unix)]
    fn test_relative_to_sibling() {
        let rel = relative_to(Path::new("/other/a.mp3"), Path::new("/music/rock")).unwrap();
        assert_eq!(rel, "../../other/a.mp3");
    }

    #[test]
    #[cfg(unix)]
    fn test_relative_to_same_dir() {
        let rel = relative_to(Path::new("/music/"), Path::new("/music")).unwrap();
        assert_eq!(rel, ".");
    }

    #[test]
    fn test_relative_to_cwd_relative_inputs() {
        let rel = relative_to(Path::new("music/a.mp3"), Path::new(".")).unwrap();
        assert_eq!(rel, "music/a.mp3");
    }

    #[test]
    fn test_entry_key_normalizes() {
        assert_eq!(entry_key("a.mp3"), "a.mp3");
        assert_eq!(entry_key("./sub//b.mp3"), "sub/b.mp3");
        assert_eq!(entry_key("sub/../c.mp3"), "c.mp3");
        assert_eq!(entry_key("../up.mp3"), "../up.mp3");
    }

    #[test]
    fn test_is_contained() {
        assert!(is_contained("a.mp3"));
        assert!(is_contained("sub/b.mp3"));
        assert!(is_contained("sub/../c.mp3"));
        assert!(!is_contained("../a.mp3"));
        assert!(!is_contained("sub/../../a.mp3"));
        assert!(!is_contained("."));
        assert!(!is_contained(""));
    }

    #[test]
    #[cfg(unix)]
    fn test_is_contained_rejects_absolute() {
        assert!(!is_contained("/etc/passwd"));
    }
}
