//! Error types for celebration calendars.

use thiserror::Error;

/// Errors that can occur while loading inputs or reading calendar files.
#[derive(Error, Debug)]
pub enum CelebrationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Profile field '{0}' is not provided")]
    MissingField(&'static str),

    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for celebration operations.
pub type CelebrationResult<T> = Result<T, CelebrationError>;
