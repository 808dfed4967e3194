//! Sorted-pair binary Merkle tree over allowlist leaves.
//!
//! Level 0 is the leaf sequence as given. Each level above pairs nodes
//! left-to-right and hashes each pair with [`Keccak256Hasher::hash_sorted_pair`];
//! an odd trailing node is paired with itself.
//!
//! Pairing is positional, so the leaf order passed to [`build_root`] and
//! [`build_proof`] must be identical for a proof to verify against the root.

use alloy_primitives::B256;

use crate::{hasher::Keccak256Hasher, root::MerkleRoot};

/// All levels of a tree, leaves first and the root level last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleLevels {
    levels: Vec<Vec<B256>>,
}

impl MerkleLevels {
    /// Builds every level from `leaves`. Duplicate leaves are kept.
    pub fn build(leaves: &[B256]) -> Self {
        let mut levels = vec![leaves.to_vec()];

        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next: Vec<B256> = level
                .chunks(2)
                .map(|pair| {
                    let left = &pair[0];
                    let right = pair.get(1).unwrap_or(left);
                    Keccak256Hasher::hash_sorted_pair(left, right)
                })
                .collect();
            levels.push(next);
        }

        Self { levels }
    }

    /// The leaf level.
    pub fn leaves(&self) -> &[B256] {
        &self.levels[0]
    }

    /// Number of levels including the leaf level. One for zero or one leaves.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Iterates over the levels, leaves first.
    pub fn iter(&self) -> impl Iterator<Item = &[B256]> {
        self.levels.iter().map(Vec::as_slice)
    }

    /// The tree root, or [`MerkleRoot::Empty`] when there are no leaves.
    pub fn root(&self) -> MerkleRoot {
        self.levels
            .last()
            .and_then(|top| top.first())
            .copied()
            .map_or(MerkleRoot::Empty, MerkleRoot::Hash)
    }

    /// Index of the first leaf equal to `leaf`.
    pub fn position(&self, leaf: &B256) -> Option<usize> {
        self.leaves().iter().position(|candidate| candidate == leaf)
    }

    /// Sibling path for the leaf at `index`, leaf level first.
    ///
    /// Returns `None` when `index` is out of range. A node without a right
    /// neighbour was hashed with itself, so it is its own sibling.
    pub fn proof_for_index(&self, index: usize) -> Option<Vec<B256>> {
        if index >= self.leaves().len() {
            return None;
        }

        let mut proof = Vec::with_capacity(self.depth() - 1);
        let mut current = index;

        for level in &self.levels[..self.depth() - 1] {
            let sibling = if current % 2 == 1 { current - 1 } else { current + 1 };
            proof.push(*level.get(sibling).unwrap_or(&level[current]));
            current /= 2;
        }

        Some(proof)
    }

    /// Sibling path for the first occurrence of `leaf`.
    ///
    /// Empty when `leaf` is not a member. A single-leaf tree also yields an
    /// empty path for its only leaf; use [`Self::position`] to tell the two
    /// apart.
    pub fn proof_for(&self, leaf: &B256) -> Vec<B256> {
        self.position(leaf).and_then(|index| self.proof_for_index(index)).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a MerkleLevels {
    type Item = &'a Vec<B256>;
    type IntoIter = std::slice::Iter<'a, Vec<B256>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Computes the root of `leaves`.
///
/// Zero leaves give [`MerkleRoot::Empty`]; a single leaf is its own root.
pub fn build_root(leaves: &[B256]) -> MerkleRoot {
    MerkleLevels::build(leaves).root()
}

/// Computes the inclusion proof of `target` within `leaves`.
///
/// An empty result means `target` is not a member.
pub fn build_proof(leaves: &[B256], target: &B256) -> Vec<B256> {
    if !leaves.contains(target) {
        return Vec::new();
    }
    MerkleLevels::build(leaves).proof_for(target)
}

/// Proof of `target` and root of `leaves` from a single tree build.
pub fn get_proof_and_root(leaves: &[B256], target: &B256) -> (Vec<B256>, MerkleRoot) {
    let levels = MerkleLevels::build(leaves);
    (levels.proof_for(target), levels.root())
}
