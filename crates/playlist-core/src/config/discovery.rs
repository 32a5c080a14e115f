//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Name of the per-directory config file
pub const PROJECT_CONFIG_NAME: &str = ".playlist.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// `.playlist.toml` in the current directory or an ancestor
    pub project: Option<PathBuf>,
    /// Global XDG config
    pub global: Option<PathBuf>,
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// A path given on the command line is always kept, so a typo surfaces
    /// as a read error instead of being silently ignored.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> ConfigFiles {
        ConfigFiles {
            cli: cli_path.map(Path::to_path_buf),
            project: std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::find_file(&cwd, PROJECT_CONFIG_NAME)),
            global: Self::find_global_config(),
        }
    }

    /// Find a config file in `start` or its nearest ancestor
    fn find_file(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("playlist").join("config.toml");
        global_config.is_file().then_some(global_config)
    }
}
