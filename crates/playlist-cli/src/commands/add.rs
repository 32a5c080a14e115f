use std::path::Path;

use anyhow::Context;
use playlist_core::ManifestStore;

use super::Settings;

pub struct Add;

impl Add {
    pub fn execute(playlist: &Path, patterns: &[String], settings: &Settings) -> anyhow::Result<()> {
        let mut manifest = settings.load_playlist(playlist)?;
        let expander = settings.expander();

        let mut count = 0usize;
        for pattern in patterns {
            let files = expander
                .expand(pattern)
                .with_context(|| format!("Failed to expand '{pattern}'"))?;
            for file in files {
                manifest
                    .add(&file)
                    .with_context(|| format!("Failed to add {}", file.display()))?;
                count += 1;
            }
        }

        println!(
            "{count} files added to {} ({} total)",
            playlist.display(),
            manifest.len()
        );

        if count > 0 {
            ManifestStore::save(&manifest, playlist)
                .with_context(|| format!("Failed to save playlist {}", playlist.display()))?;
        }

        Ok(())
    }
}
