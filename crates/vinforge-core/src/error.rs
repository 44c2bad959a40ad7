use thiserror::Error;

/// Core error type shared across Vinforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A vehicle record violates input invariants.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    /// A requested feature is not yet supported.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Convenience alias for results returned by Vinforge crates.
pub type Result<T> = std::result::Result<T, Error>;
