//! Merkle root value and comparison against the root stored on chain.

use std::fmt;

use alloy_primitives::B256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::Result, leaf::parse_hash};

/// Root of an allowlist tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MerkleRoot {
    /// No leaves, meaning no allowlist is configured. Not a hash; never
    /// compare it against an on-chain `bytes32` as if it were one.
    #[default]
    Empty,
    /// Root hash of a non-empty tree.
    Hash(B256),
}

impl MerkleRoot {
    /// Returns the root hash, or `None` for an empty tree.
    pub const fn hash(&self) -> Option<B256> {
        match self {
            Self::Empty => None,
            Self::Hash(hash) => Some(*hash),
        }
    }

    /// Whether this is the empty-tree sentinel.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<B256> for MerkleRoot {
    fn from(hash: B256) -> Self {
        Self::Hash(hash)
    }
}

impl fmt::Display for MerkleRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("0x"),
            Self::Hash(hash) => write!(f, "{hash:#x}"),
        }
    }
}

impl Serialize for MerkleRoot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MerkleRoot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_root(&text).map_err(serde::de::Error::custom)
    }
}

/// Parses a root as stored on chain or given on the command line.
///
/// `0x` + 64 hex digits is a root hash. `0x` and `0x0` are how an unset
/// `bytes32` is commonly rendered and map to [`MerkleRoot::Empty`].
///
/// # Errors
/// Returns [`AllowlistError::InvalidHash`](crate::AllowlistError::InvalidHash)
/// for anything else.
pub fn parse_root(input: &str) -> Result<MerkleRoot> {
    let trimmed = input.trim();
    if trimmed == "0x" || trimmed == "0x0" {
        return Ok(MerkleRoot::Empty);
    }
    parse_hash(trimmed).map(MerkleRoot::Hash)
}

/// Outcome of checking a locally computed root against the on-chain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    /// Both roots are set and equal.
    Match,
    /// Both roots are set and differ. Proofs built locally will not verify.
    Mismatch {
        /// Root computed from the local allowlist.
        local: B256,
        /// Root stored on chain.
        on_chain: B256,
    },
    /// The contract has no root set, so there is nothing to compare against.
    OnChainUnset,
    /// The local allowlist is empty.
    LocalEmpty,
}

impl RootStatus {
    /// Whether local proofs can be expected to verify on chain.
    pub const fn is_consistent(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Compares a local root with the on-chain root.
///
/// An on-chain value of all zeroes counts as unset.
pub fn compare_roots(local: &MerkleRoot, on_chain: &MerkleRoot) -> RootStatus {
    let on_chain = match on_chain {
        MerkleRoot::Hash(hash) if !hash.is_zero() => *hash,
        _ => return RootStatus::OnChainUnset,
    };
    match local {
        MerkleRoot::Empty => RootStatus::LocalEmpty,
        MerkleRoot::Hash(local) if *local == on_chain => RootStatus::Match,
        MerkleRoot::Hash(local) => RootStatus::Mismatch { local: *local, on_chain },
    }
}
