//! Logging configuration
//!
//! Diagnostics go to stderr, never stdout: stdout carries the JSON result.
//! An optional log file receives debug output as well.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Rotate the log file once it grows past this size
const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

fn term_logger(level: LevelFilter) -> Box<dyn SharedLogger> {
    TermLogger::new(level, log_config(), TerminalMode::Stderr, ColorChoice::Auto)
}

/// Initialize the logging system
///
/// Returns true when the log file was opened.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> bool {
    let mut loggers = vec![term_logger(level)];

    let file_opened = match log_file {
        Some(path) => match open_log_file(path) {
            Ok(file) => {
                loggers.push(WriteLogger::new(LevelFilter::Debug, log_config(), file));
                true
            }
            Err(e) => {
                eprintln!("Warning: Could not open log file {}: {}", path.display(), e);
                false
            }
        },
        None => false,
    };

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Warning: Logger already initialized");
    }

    file_opened
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > MAX_LOG_BYTES {
            let _ = fs::rename(path, path.with_extension("log.old"));
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}
