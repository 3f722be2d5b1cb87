//! extract-tags
//!
//! Reads title, artist, album, genre, duration and embedded cover art from a
//! single audio file and prints them as one line of JSON on stdout. Every run
//! prints exactly one JSON object, either the metadata or `{"error": ...}`.

mod audio;
mod config;
mod emit;
mod error;
mod logging;
mod record;
mod test_fixtures;

use config::Cli;
use error::{ExtractError, Result};
use log::LevelFilter;
use record::{ErrorRecord, MetadataRecord};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::try_from_args(std::env::args_os());

    match &cli {
        Ok(cli) => logging::init_logging(cli.log_level, cli.log_file.as_deref()),
        Err(_) => logging::init_logging(LevelFilter::Info, None),
    };

    let mut out = io::stdout().lock();

    let cli = match cli {
        Ok(cli) => cli,
        Err(e) => return fail(&mut out, e.to_string()),
    };

    match run(&cli.path, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ExtractError::Load { path, reason }) => {
            log::error!("Could not load audio file: {}", path.display());
            log::debug!("Load failure: {}", reason);
            fail(
                &mut out,
                format!("Could not extract metadata from {}", cli.path.display()),
            )
        }
        Err(e) => {
            let msg = format!("Error processing file {}: {}", cli.path.display(), e);
            log::error!("{}", msg);
            fail(&mut out, msg)
        }
    }
}

/// Load, extract, print
fn run<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let handle = audio::load(path)?;
    let record = MetadataRecord::from_handle(&handle);
    emit::emit(out, &record)
}

fn fail<W: Write>(out: &mut W, message: String) -> ExitCode {
    if let Err(e) = emit::emit(out, &ErrorRecord::new(message)) {
        log::error!("Could not write error output: {}", e);
    }
    ExitCode::FAILURE
}
