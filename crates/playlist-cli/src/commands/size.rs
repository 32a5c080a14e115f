use std::path::Path;

use anyhow::Context;
use playlist_core::ByteSize;

use super::Settings;

pub struct Size;

impl Size {
    pub fn execute(playlist: &Path, settings: &Settings) -> anyhow::Result<()> {
        let manifest = settings.load_playlist(playlist)?;
        let total = manifest
            .total_size()
            .context("Failed to size playlist (run `check` to list missing files)")?;

        println!("{}", ByteSize(total));
        Ok(())
    }
}
