//! Error types for allowlist loading and hex parsing.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AllowlistError>;

/// Errors surfaced by the allowlist boundary.
///
/// Membership misses and empty allowlists are not errors: they come back as an
/// empty proof and [`MerkleRoot::Empty`](crate::MerkleRoot::Empty).
#[derive(Debug, thiserror::Error)]
pub enum AllowlistError {
    /// An address string is not 20 bytes of hex.
    #[error("invalid address {input:?}: {reason}")]
    InvalidAddress {
        /// The offending input, as given.
        input: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An allowlist entry failed address validation.
    #[error("allowlist entry {index} is not a valid address: {source}")]
    InvalidEntry {
        /// Position of the entry in the source document.
        index: usize,
        /// The underlying address error.
        #[source]
        source: Box<Self>,
    },

    /// A hash string is not 32 bytes of hex.
    #[error("invalid bytes32 value {input:?}: {reason}")]
    InvalidHash {
        /// The offending input, as given.
        input: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Proof text was blank.
    #[error("proof input is empty")]
    EmptyProofInput,

    /// The allowlist document is valid JSON but not an array.
    #[error("allowlist must be a JSON array of addresses, e.g. [\"0xabc...\",\"0xdef...\"]")]
    NotAnArray,

    /// The allowlist holds more entries than the configured bound.
    #[error("allowlist has {count} entries, more than the configured maximum of {max}")]
    TooManyEntries {
        /// Number of entries found.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The allowlist file could not be read.
    #[error("failed to read allowlist file {path:?}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The allowlist document is not valid JSON.
    #[error("failed to parse allowlist JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AllowlistError {
    pub(crate) fn invalid_address(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAddress { input: input.to_string(), reason: reason.into() }
    }

    pub(crate) fn invalid_hash(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidHash { input: input.to_string(), reason: reason.into() }
    }
}
