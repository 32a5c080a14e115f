use std::path::Path;

use anyhow::Context;

use super::Settings;
use super::common::plural;

pub struct Check;

impl Check {
    /// Returns whether every playlist entry exists
    pub fn execute(playlist: &Path, settings: &Settings) -> anyhow::Result<bool> {
        let manifest = settings.load_playlist(playlist)?;
        let missing = manifest
            .find_missing()
            .context("Failed to resolve playlist entries")?;

        println!("{} file{} missing.", missing.len(), plural(missing.len()));
        for path in &missing {
            println!("{}", path.display());
        }

        Ok(missing.is_empty())
    }
}
