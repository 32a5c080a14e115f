//! Configuration file parsing, merging and validation
//!
//! This module handles:
//! - Config file discovery (CLI flag, `.playlist.toml`, global config)
//! - TOML parsing with serde
//! - Merging with precedence rules
//! - Validation

mod discovery;
mod merge;
mod types;
mod validation;


use std::path::Path;

use tracing::debug;

pub use discovery::{ConfigDiscovery, ConfigFiles, PROJECT_CONFIG_NAME};
pub use merge::ConfigMerger;
pub use types::Config;
pub use validation::ConfigValidator;

use crate::error::Result;

/// Coordinates discovery, parsing, merging and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if config files are invalid or cannot be read.
    pub fn load(cli_config_path: Option<&Path>) -> Result<Config> {
        let config_files = ConfigDiscovery::discover(cli_config_path);
        debug!(?config_files, "discovered config files");

        let merged = ConfigMerger::merge(&config_files)?;
        ConfigValidator::validate(&merged)?;

        Ok(merged)
    }
}
