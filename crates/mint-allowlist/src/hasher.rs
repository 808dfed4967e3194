//! Keccak256 hasher for allowlist trees

use alloy_primitives::B256;
use tiny_keccak::{Hasher, Keccak};

/// Keccak256 hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    /// Hash a single value
    pub fn hash(data: &[u8]) -> B256 {
        let mut hasher = Keccak::v256();
        hasher.update(data);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        B256::from(output)
    }

    /// Hash two siblings, smaller value first.
    ///
    /// Matches OpenZeppelin's `MerkleProof` commutative pair hash, so swapping
    /// `a` and `b` yields the same parent.
    pub fn hash_sorted_pair(a: &B256, b: &B256) -> B256 {
        let (left, right) = if b < a { (b, a) } else { (a, b) };
        let mut hasher = Keccak::v256();
        hasher.update(left.as_slice());
        hasher.update(right.as_slice());
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        B256::from(output)
    }
}
