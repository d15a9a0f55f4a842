// Start-up errors: log level parsing, logger installation

use log::SetLoggerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RacerError {
    #[error("Unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("Failed to install logger: {0}")]
    Logger(#[from] SetLoggerError),
}
