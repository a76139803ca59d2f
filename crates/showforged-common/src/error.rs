//! Common error types used throughout showforged.
//!
//! Detection and template rendering never fail; this error type covers the
//! places that do: composing rename plans from templates, loading settings,
//! and reading input files.

/// Common error type for showforged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A template could not be used (empty, or unusable for the requested name).
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// The media model lacks data required to build a name.
    #[error("Incomplete metadata: {0}")]
    Incomplete(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Settings could not be applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new InvalidTemplate error.
    pub fn invalid_template<S: Into<String>>(msg: S) -> Self {
        Self::InvalidTemplate(msg.into())
    }

    /// Create a new Incomplete error.
    pub fn incomplete<S: Into<String>>(msg: S) -> Self {
        Self::Incomplete(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new Io error from a message.
    pub fn io<S: Into<String>>(msg: S) -> Self {
        Self::Io(std::io::Error::other(msg.into()))
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
