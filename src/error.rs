use thiserror::Error;

/// Unified error type for the cache crate.
///
/// A cache miss is never an error: `get` reports it as `None`. The variants
/// here cover the only real failure modes the crate has.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction-time configuration, e.g. a zero capacity.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failure signal from an external synthesis producer, carrying a
    /// human-readable reason.
    #[error("Synthesis failed: {0}")]
    Synthesis(String),
}

impl Error {
    /// Create a new configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new synthesis error
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Error::Synthesis(msg.into())
    }
}
