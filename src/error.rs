//! Error types for breathe.

use thiserror::Error;

/// Errors that can occur while running a breathing session.
///
/// Reading the menu selection is deliberately not represented here: a
/// missing or unreadable selection falls back to the default technique.
#[derive(Error, Debug)]
pub enum BreatheError {
    /// Writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BreatheError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Config(_) => 2,
        }
    }
}
