//! Error types for dexview.
//!
//! This module defines the centralized error type [`DexError`] and a type alias
//! [`Result`] used throughout the crate. URL decoding is deliberately absent
//! from this taxonomy: malformed view parameters resolve to defaults and never
//! surface as errors.

use thiserror::Error;

/// The main error type for dexview operations.
///
/// Fetch failures are split into [`DexError::Transport`] (the request itself
/// failed) and [`DexError::NotFound`] (the request succeeded but the key
/// matched nothing), so the detail overlay can tell the two apart.
#[derive(Debug, Error)]
pub enum DexError {
    /// The GraphQL request failed.
    ///
    /// Covers connection failures, non-success HTTP statuses and GraphQL
    /// `errors` payloads. Terminal for the attempt; no retry is made.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A detail lookup resolved to no item.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server answered but the payload did not have the expected shape.
    #[error("Response error: {0}")]
    Response(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background fetch worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DexError {
    /// Returns `true` for the logical "no such item" outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A specialized `Result` type for dexview operations.
pub type Result<T> = std::result::Result<T, DexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable_from_transport() {
        assert!(DexError::NotFound("Missingno".into()).is_not_found());
        assert!(!DexError::Transport("connection refused".into()).is_not_found());
    }

    #[test]
    fn messages_carry_category_prefix() {
        let err = DexError::Transport("HTTP 502".into());
        assert_eq!(err.to_string(), "Transport error: HTTP 502");
    }
}
