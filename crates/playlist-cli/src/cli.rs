use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use playlist_core::FailurePolicy;

/// Manage audio playlists and sync them to portable devices
///
/// A playlist is a text file with one file per line, relative to the base path.
#[derive(Parser, Debug)]
#[command(name = "playlist")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Directory playlist entries are relative to [default: .]
    #[arg(
        short = 'b',
        long = "base-path",
        visible_alias = "base_path",
        env = "PLAYLIST_BASE_PATH",
        global = true,
        value_name = "PATH"
    )]
    pub base_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Descend into symlinked directories when adding and syncing
    #[arg(long, global = true)]
    pub follow_symlinks: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add files to a playlist, creating it if needed
    ///
    /// A directory adds every audio file beneath it; anything else is a glob.
    Add {
        /// Path to playlist
        #[arg(value_name = "PLAYLIST")]
        playlist: PathBuf,

        /// Directories or glob patterns to add
        #[arg(value_name = "PATTERN", required = true)]
        patterns: Vec<String>,
    },

    /// Check a playlist for missing files (exit status 1 if any are missing)
    Check {
        /// Path to playlist
        #[arg(value_name = "PLAYLIST")]
        playlist: PathBuf,
    },

    /// Print the total size of a playlist
    Size {
        /// Path to playlist
        #[arg(value_name = "PLAYLIST")]
        playlist: PathBuf,
    },

    /// Sync a playlist to a device, deleting files not in the playlist
    Sync {
        /// Path to playlist
        #[arg(value_name = "PLAYLIST")]
        playlist: PathBuf,

        /// Path to device
        #[arg(value_name = "DEVICE_PATH")]
        device_path: PathBuf,

        /// Preview changes without executing
        #[arg(long)]
        dry_run: bool,

        /// What to do when a copy or delete fails
        #[arg(long, value_enum, value_name = "MODE")]
        on_error: Option<OnError>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OnError {
    /// Stop at the first failure (default)
    Abort,
    /// Attempt every change and report all failures
    Continue,
}

impl From<OnError> for FailurePolicy {
    fn from(mode: OnError) -> Self {
        match mode {
            OnError::Abort => Self::Abort,
            OnError::Continue => Self::Continue,
        }
    }
}
