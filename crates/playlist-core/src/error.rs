//! Error types for the playlist library

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`PlaylistError`]
pub type Result<T> = std::result::Result<T, PlaylistError>;

/// Errors raised by playlist, scanning, config and sync operations
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// The process working directory could not be determined
    #[error("Failed to determine current directory")]
    CurrentDir(#[source] io::Error),

    /// A path cannot be stored in a UTF-8 playlist
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// Two paths share no common root (e.g. different drives)
    #[error("Cannot express {} relative to {}", .path.display(), .base.display())]
    NoCommonRoot {
        /// Path being made relative
        path: PathBuf,
        /// Anchor directory
        base: PathBuf,
    },

    /// A playlist file could not be stat'ed or read
    #[error("Failed to access {}", .path.display())]
    FileAccess {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The playlist file exists but could not be read
    #[error("Failed to read playlist {}", .path.display())]
    ManifestRead {
        /// Playlist file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The playlist file could not be written
    #[error("Failed to write playlist {}", .path.display())]
    ManifestWrite {
        /// Playlist file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed
    #[error("Failed to scan {}", .path.display())]
    Scan {
        /// Directory being walked
        path: PathBuf,
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// A destination directory could not be created
    #[error("Failed to create directory: {}", .path.display())]
    CreateDirectory {
        /// Directory being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A file could not be copied to the destination
    #[error("Failed to copy {} to {}", .from.display(), .to.display())]
    Copy {
        /// Source file
        from: PathBuf,
        /// Destination file
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A destination file could not be deleted
    #[error("Failed to remove {}", .path.display())]
    Remove {
        /// File being removed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An empty destination directory could not be removed
    #[error("Failed to remove directory {}", .path.display())]
    RemoveDirectory {
        /// Directory being removed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A playlist entry would be written outside the destination root
    #[error("Entry '{entry}' escapes the destination directory")]
    EscapesDestination {
        /// Offending playlist entry
        entry: String,
    },

    /// A pattern given to `add` is not a valid glob
    #[error("Invalid pattern: '{pattern}'")]
    InvalidPattern {
        /// Offending pattern
        pattern: String,
        /// Underlying glob error
        #[source]
        source: globset::Error,
    },

    /// A config file could not be read
    #[error("Failed to read config file: {}", .path.display())]
    ConfigRead {
        /// Config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A config file is not valid TOML for [`crate::config::Config`]
    #[error("Failed to parse config file: {}", .path.display())]
    ConfigParse {
        /// Config file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// The merged configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
