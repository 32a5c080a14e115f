//! Settings shared by every command

use std::path::{Path, PathBuf};

use anyhow::Context;
use playlist_core::config::{Config, ConfigManager};
use playlist_core::{
    DirectoryScanner, FailurePolicy, ManifestStore, PathManifest, PatternExpander, ScanOptions,
};
use tracing::debug;

use crate::cli::Cli;

/// Effective settings: CLI flags over config files over defaults
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory playlist entries are relative to
    pub base_path: PathBuf,
    /// Symlink policy for adding and syncing
    pub scan_options: ScanOptions,
    /// Extensions added from directories
    pub extensions: Vec<String>,
    /// Whether a failure stops a sync
    pub failure_policy: FailurePolicy,
    /// Whether sync only previews
    pub dry_run: bool,
}

impl Settings {
    /// Load config files (unless disabled) and apply CLI flags on top
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let config = if cli.no_config {
            Config::default()
        } else {
            ConfigManager::load(cli.config.as_deref()).context("Failed to load configuration")?
        };

        let mut settings = Self::from_config(&config);
        if let Some(base_path) = &cli.base_path {
            settings.base_path.clone_from(base_path);
        }
        if cli.follow_symlinks {
            settings.scan_options.follow_symlinks = true;
        }

        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    fn from_config(config: &Config) -> Self {
        Self {
            base_path: config.base_path(),
            scan_options: config.scan_options(),
            extensions: config.extensions(),
            failure_policy: config.failure_policy(),
            dry_run: config.dry_run == Some(true),
        }
    }

    /// Load a playlist anchored at the base path
    pub fn load_playlist(&self, playlist: &Path) -> anyhow::Result<PathManifest> {
        ManifestStore::load(playlist, &self.base_path)
            .with_context(|| format!("Failed to load playlist {}", playlist.display()))
    }

    /// Scanner honouring the symlink policy
    pub fn scanner(&self) -> DirectoryScanner {
        DirectoryScanner::new(self.scan_options)
    }

    /// Pattern expander for `add`
    pub fn expander(&self) -> PatternExpander {
        PatternExpander::new(self.scanner(), self.extensions.clone())
    }
}

/// `"s"` unless `count` is exactly one
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
