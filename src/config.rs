//! Command-line configuration
//!
//! The only positional argument is the audio file. Logging can be tuned with
//! flags or environment variables; neither affects what is written to stdout.

use crate::error::{ExtractError, Result};
use clap::Parser;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

/// Extract title, artist, album, genre, duration and cover art from one audio file as JSON
#[derive(Parser, Debug)]
#[command(name = "extract-tags")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Audio file to read
    #[arg(value_name = "AUDIO_FILE", allow_hyphen_values = true)]
    pub path: PathBuf,

    /// Diagnostic level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, env = "EXTRACT_TAGS_LOG", default_value = "info")]
    pub log_level: LevelFilter,

    /// Also append diagnostics to this file
    #[arg(long, env = "EXTRACT_TAGS_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments, mapping every clap failure to a usage error
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(|e| {
            log::debug!("Argument error: {}", e.kind());
            ExtractError::Usage
        })
    }
}
