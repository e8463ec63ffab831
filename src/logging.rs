//! Log file setup.
//!
//! The terminal is the image, so logs only go to a file and nothing is
//! installed without one.

use std::error::Error;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FRACTERM_LOG";
pub const DEFAULT_DIRECTIVE: &str = "info";

#[derive(Debug)]
pub enum LoggingError {
    Io(io::Error),
    Install(SetGlobalDefaultError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not open log file: {}", err),
            Self::Install(err) => write!(f, "could not install logger: {}", err),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Install(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SetGlobalDefaultError> for LoggingError {
    fn from(err: SetGlobalDefaultError) -> Self {
        Self::Install(err)
    }
}

/// Installs the global subscriber when `log_file` is given. Returns whether
/// one was installed.
pub fn init(log_file: Option<&Path>) -> Result<bool, LoggingError> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing::subscriber::set_global_default(file_subscriber(file, env_filter()))?;

    Ok(true)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish()
}
