//! Error types for the on-call calendar Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the on-call calendar feed.
///
/// Every variant is fatal for the invocation: there is no partial or
/// degraded calendar output, and no retry is attempted internally.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (required environment variable missing)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The rotation source query failed (network, auth, throttling)
    #[error("Rotation query failed: {0}")]
    SourceQuery(String),

    /// A shift record from the rotation source is unusable
    #[error("Malformed shift record: {0}")]
    MalformedRecord(String),
}
