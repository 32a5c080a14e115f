//! # playlist-core
//!
//! Core library for the `playlist` tool.
//!
//! A playlist is a plain text file listing audio files relative to a base
//! directory. This library loads and saves those files, expands patterns into
//! new entries, and reconciles a playlist against a destination directory such
//! as a mounted portable player.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod manifest;
pub mod scanner;
pub mod size;
pub mod sync;

pub use error::{PlaylistError, Result};
pub use manifest::{ManifestStore, PathManifest};
pub use scanner::{DirectoryScanner, ListedFile, PatternExpander, ScanOptions};
pub use size::ByteSize;
pub use sync::{FailurePolicy, Reconciler, SyncAction, SyncPlan, SyncReporter, SyncResult};
