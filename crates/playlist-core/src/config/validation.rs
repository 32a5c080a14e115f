//! Configuration validation and error reporting

use super::types::Config;
use crate::error::{PlaylistError, Result};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(config: &Config) -> Result<()> {
        if config
            .base_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(PlaylistError::InvalidConfig(
                "base_path cannot be empty".to_string(),
            ));
        }

        if let Some(extensions) = &config.extensions {
            for ext in extensions {
                if ext.trim().is_empty() {
                    return Err(PlaylistError::InvalidConfig(
                        "Extension cannot be empty".to_string(),
                    ));
                }
                if ext.starts_with('.') {
                    return Err(PlaylistError::InvalidConfig(format!(
                        "Extension '{ext}' must not start with '.'"
                    )));
                }
            }
        }

        Ok(())
    }
}
