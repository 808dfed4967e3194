//! Allowlist proof verification and proof text handling.

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AllowlistError, Result},
    hasher::Keccak256Hasher,
    leaf::{format_hash_hex, parse_hash},
    root::MerkleRoot,
};

/// Inclusion proof for one allowlisted address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistProof {
    /// The address being proven
    pub address: Address,
    /// `keccak256(abi.encodePacked(address))`
    pub leaf: B256,
    /// Sibling hashes from leaf to root
    pub proof: Vec<B256>,
    /// Root the proof was built against
    pub root: MerkleRoot,
}

impl AllowlistProof {
    /// Verify this proof against its own root
    pub fn verify(&self) -> bool {
        verify_proof(&self.proof, &self.root, &self.leaf)
    }

    /// Verify this proof against some other root, e.g. the one stored on chain
    pub fn verify_against(&self, root: &MerkleRoot) -> bool {
        verify_proof(&self.proof, root, &self.leaf)
    }

    /// Compute root from proof
    pub fn compute_root(&self) -> B256 {
        compute_root(&self.proof, &self.leaf)
    }

    /// Proof as JSON array text, ready for `allowlistMint(bytes32[] proof)`
    pub fn proof_json(&self) -> String {
        format_proof(&self.proof)
    }
}

/// Folds `leaf` with each sibling in turn using the sorted-pair rule.
pub fn compute_root(proof: &[B256], leaf: &B256) -> B256 {
    proof.iter().fold(*leaf, |current, sibling| Keccak256Hasher::hash_sorted_pair(&current, sibling))
}

/// Checks that `proof` connects `leaf` to `root`.
///
/// An empty root never verifies.
pub fn verify_proof(proof: &[B256], root: &MerkleRoot, leaf: &B256) -> bool {
    root.hash().is_some_and(|root| compute_root(proof, leaf) == root)
}

/// Parses a proof pasted by a user.
///
/// A JSON array of hex strings is tried first; anything that is not one is
/// read as a comma-separated list. `[]` is a valid empty proof.
///
/// # Errors
/// [`AllowlistError::EmptyProofInput`] for blank input and
/// [`AllowlistError::InvalidHash`] for any element that is not 32 bytes of hex.
pub fn parse_proof(input: &str) -> Result<Vec<B256>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AllowlistError::EmptyProofInput);
    }

    match serde_json::from_str::<Vec<String>>(trimmed) {
        Ok(elements) => elements.iter().map(|element| parse_hash(element)).collect(),
        Err(_) => trimmed
            .split(',')
            .map(str::trim)
            .filter(|element| !element.is_empty())
            .map(parse_hash)
            .collect(),
    }
}

/// Formats a proof as a JSON array of `0x`-prefixed lowercase hex strings.
pub fn format_proof(proof: &[B256]) -> String {
    let elements: Vec<String> = proof.iter().map(format_hash_hex).collect();
    serde_json::Value::from(elements).to_string()
}
