//! Configuration types and structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scanner::{DEFAULT_EXTENSIONS, ScanOptions};
use crate::sync::FailurePolicy;

/// Settings read from `playlist` config files
///
/// Every field is optional so a higher-precedence file only overrides what
/// it sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory playlist entries are relative to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    /// Descend into symlinked directories when adding and scanning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_symlinks: Option<bool>,

    /// Whether a failed copy or delete stops a sync
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_error: Option<FailurePolicy>,

    /// File extensions added when a directory is given to `add`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Only print what a sync would do
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl Config {
    /// Base path, defaulting to the current directory
    #[must_use]
    pub fn base_path(&self) -> PathBuf {
        self.base_path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Scan options shared by `add` and `sync`
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            follow_symlinks: self.follow_symlinks == Some(true),
        }
    }

    /// Failure policy, defaulting to [`FailurePolicy::Abort`]
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.on_error.unwrap_or_default()
    }

    /// Audio extensions, defaulting to `mp3`
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
        })
    }
}
