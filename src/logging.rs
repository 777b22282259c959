use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::model::config::LogConfig;

/// Environment variable holding a filter directive that overrides `log.level`
pub const LOG_ENV: &str = "JOT_LOG";

/// Where diagnostic events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Headless commands: stdout carries results, so events go to stderr
    Stderr,
    /// The TUI owns the terminal, so events go to the log file
    File,
}

/// Install the global subscriber. Calling this twice is harmless; the second
/// call is ignored.
pub fn init_logging(config: &LogConfig, target: LogTarget) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init();
        }
        LogTarget::File => {
            // Without a writable log file events are dropped
            if let Some(file) = open_log_file(config) {
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_ansi(false)
                            .with_writer(Mutex::new(file)),
                    )
                    .try_init();
            }
        }
    }
}

/// `log.file`, else `<data-local-dir>/jot/jot.log`
pub fn log_file_path(config: &LogConfig) -> Option<PathBuf> {
    config
        .file
        .clone()
        .or_else(|| dirs::data_local_dir().map(|dir| dir.join("jot").join("jot.log")))
}

fn open_log_file(config: &LogConfig) -> Option<File> {
    let path = log_file_path(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(&path).ok()
}
