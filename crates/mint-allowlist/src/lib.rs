//! Merkle allowlist for gated NFT minting.
//!
//! Builds the tree an on-chain verifier such as OpenZeppelin's `MerkleProof`
//! checks against:
//! - Leaves are `keccak256(abi.encodePacked(address))`
//! - Parents hash the two children smaller-first (sorted pairs)
//! - An odd trailing node is paired with itself
//!
//! Everything here is a pure function of its inputs; trees are rebuilt per
//! call and nothing is cached between calls.
//!
//! ```
//! use mint_allowlist::{build_root, compute_leaf, get_proof_and_root, verify_proof};
//!
//! let leaves: Vec<_> = [
//!     "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
//!     "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
//!     "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
//! ]
//! .iter()
//! .map(|address| compute_leaf(address))
//! .collect::<Result<_, _>>()?;
//!
//! let (proof, root) = get_proof_and_root(&leaves, &leaves[1]);
//! assert_eq!(root, build_root(&leaves));
//! assert!(verify_proof(&proof, &root, &leaves[1]));
//! # Ok::<(), mint_allowlist::AllowlistError>(())
//! ```

mod allowlist;
mod config;
mod error;
mod hasher;
mod leaf;
mod proof;
mod root;
mod tree;

pub use allowlist::Allowlist;
pub use config::{AllowlistConfig, DEFAULT_MAX_ENTRIES, MAX_ENTRIES_ENV};
pub use error::{AllowlistError, Result};
pub use hasher::Keccak256Hasher;
pub use leaf::{address_leaf, compute_leaf, format_hash_hex, parse_address, parse_hash};
pub use proof::{AllowlistProof, compute_root, format_proof, parse_proof, verify_proof};
pub use root::{MerkleRoot, RootStatus, compare_roots, parse_root};
pub use tree::{MerkleLevels, build_proof, build_root, get_proof_and_root};

pub use alloy_primitives::{Address, B256};
