//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::Domain(e) => match e {
                DomainError::FileNotFound(_) => crate::exitcode::NOINPUT,
                DomainError::FileReadError(_) => crate::exitcode::IOERR,
                DomainError::InvalidFormat { .. } => crate::exitcode::DATAERR,
                DomainError::TitleNotFound(_) => crate::exitcode::DATAERR,
                DomainError::PathResolution { .. } => crate::exitcode::SOFTWARE,
            },
        }
    }
}
