//! Configuration merging with precedence rules
//!
//! Files are applied from lowest to highest precedence; any field a file sets
//! replaces the value from files below it. A relative `base_path` is taken
//! relative to the directory of the file that sets it.

use std::fs;
use std::path::Path;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::{PlaylistError, Result};

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge discovered config files
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. `.playlist.toml`
    /// 3. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        for path in [&files.global, &files.project, &files.cli].into_iter().flatten() {
            Self::merge_into(&mut merged, path)?;
        }

        Ok(merged)
    }

    /// Load and merge a single config file into the existing config
    fn merge_into(base: &mut Config, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|source| PlaylistError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| PlaylistError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(base_path) = config.base_path {
            base.base_path = Some(match path.parent() {
                Some(dir) if base_path.is_relative() => dir.join(base_path),
                _ => base_path,
            });
        }
        if config.follow_symlinks.is_some() {
            base.follow_symlinks = config.follow_symlinks;
        }
        if config.on_error.is_some() {
            base.on_error = config.on_error;
        }
        if config.extensions.is_some() {
            base.extensions = config.extensions;
        }
        if config.dry_run.is_some() {
            base.dry_run = config.dry_run;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::FailurePolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_merge_empty_config() {
        let config = ConfigMerger::merge(&ConfigFiles::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge_higher_precedence_overrides() {
        let tmp = TempDir::new().unwrap();

        let global = tmp.path().join("global.toml");
        fs::write(
            &global,
            "follow_symlinks = true\non_error = \"continue\"\nextensions = [\"ogg\"]\n",
        )
        .unwrap();

        let project = tmp.path().join("project.toml");
        fs::write(&project, "follow_symlinks = false\n").unwrap();

        let files = ConfigFiles {
            cli: None,
            project: Some(project),
            global: Some(global),
        };
        let config = ConfigMerger::merge(&files).unwrap();

        assert_eq!(config.follow_symlinks, Some(false));
        assert_eq!(config.on_error, Some(FailurePolicy::Continue));
        assert_eq!(config.extensions, Some(vec!["ogg".to_string()]));
    }

    #[test]
    fn test_merge_relative_base_path_anchored_at_file() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("config.toml");
        fs::write(&config_file, "base_path = \"music\"\n").unwrap();

        let files = ConfigFiles {
            cli: Some(config_file),
            ..ConfigFiles::default()
        };
        let config = ConfigMerger::merge(&files).unwrap();

        assert_eq!(config.base_path, Some(tmp.path().join("music")));
    }

    #[test]
    fn test_merge_absolute_base_path_unchanged() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("config.toml");
        let absolute = tmp.path().join("library");
        fs::write(
            &config_file,
            format!("base_path = {:?}\n", absolute.to_str().unwrap()),
        )
        .unwrap();

        let files = ConfigFiles {
            cli: Some(config_file),
            ..ConfigFiles::default()
        };
        let config = ConfigMerger::merge(&files).unwrap();

        assert_eq!(config.base_path, Some(absolute));
    }

    #[test]
    fn test_merge_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let files = ConfigFiles {
            cli: Some(tmp.path().join("absent.toml")),
            ..ConfigFiles::default()
        };

        let result = ConfigMerger::merge(&files);

        assert!(matches!(result, Err(PlaylistError::ConfigRead { .. })));
    }

    #[test]
    fn test_merge_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("config.toml");
        fs::write(&config_file, "on_error = \"sometimes\"\n").unwrap();

        let files = ConfigFiles {
            cli: Some(config_file),
            ..ConfigFiles::default()
        };
        let result = ConfigMerger::merge(&files);

        assert!(matches!(result, Err(PlaylistError::ConfigParse { .. })));
    }
}
