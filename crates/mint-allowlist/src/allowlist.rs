//! Loading an address allowlist and answering root and proof queries over it.
//!
//! The source document is a JSON array of address strings, e.g. the
//! `allowlist.json` served next to the mint page. Entries are trimmed, blank
//! and non-string entries are skipped, and every remaining entry must be a
//! well-formed address. Order and duplicates are preserved because leaf
//! position determines the tree shape.

use std::{fs, path::Path};

use alloy_primitives::{Address, B256};
use serde_json::Value;

use crate::{
    config::AllowlistConfig,
    error::{AllowlistError, Result},
    leaf::{address_leaf, parse_address},
    proof::AllowlistProof,
    root::MerkleRoot,
    tree::MerkleLevels,
};

/// An ordered, validated set of allowlisted addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist {
    addresses: Vec<Address>,
    leaves: Vec<B256>,
}

impl Allowlist {
    /// Builds an allowlist from already-parsed addresses.
    ///
    /// # Errors
    /// [`AllowlistError::TooManyEntries`] when `addresses` exceeds the bound.
    pub fn new(addresses: Vec<Address>, config: &AllowlistConfig) -> Result<Self> {
        if addresses.len() > config.max_entries {
            return Err(AllowlistError::TooManyEntries {
                count: addresses.len(),
                max: config.max_entries,
            });
        }
        let leaves = addresses.iter().map(address_leaf).collect();
        Ok(Self { addresses, leaves })
    }

    /// Parses a JSON array of address strings.
    pub fn from_json_str(json: &str, config: &AllowlistConfig) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        let Value::Array(entries) = document else {
            return Err(AllowlistError::NotAnArray);
        };

        let raw: Vec<(usize, &str)> = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                Value::String(s) if !s.trim().is_empty() => Some((index, s.as_str())),
                other => {
                    tracing::warn!(target: "allowlist", index, entry = %other, "Skipping blank or non-string allowlist entry");
                    None
                }
            })
            .collect();

        Self::from_entries(raw, config)
    }

    /// Reads and parses a JSON allowlist file.
    pub fn from_json_file(path: impl AsRef<Path>, config: &AllowlistConfig) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| AllowlistError::Io { path: path.to_path_buf(), source })?;
        let allowlist = Self::from_json_str(&json, config)?;

        tracing::debug!(target: "allowlist", ?path, entries = allowlist.len(), "Loaded allowlist file");
        Ok(allowlist)
    }

    /// Parses a comma-separated list of addresses.
    pub fn from_comma_separated(list: &str, config: &AllowlistConfig) -> Result<Self> {
        let raw = list.split(',').enumerate().filter(|(_, entry)| !entry.trim().is_empty()).collect();
        Self::from_entries(raw, config)
    }

    fn from_entries(raw: Vec<(usize, &str)>, config: &AllowlistConfig) -> Result<Self> {
        if raw.len() > config.max_entries {
            return Err(AllowlistError::TooManyEntries { count: raw.len(), max: config.max_entries });
        }

        let addresses = raw
            .into_iter()
            .map(|(index, entry)| {
                parse_address(entry)
                    .map_err(|source| AllowlistError::InvalidEntry { index, source: Box::new(source) })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(addresses, config)
    }

    /// Allowlisted addresses in source order.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Leaf hashes in source order.
    pub fn leaves(&self) -> &[B256] {
        &self.leaves
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether the allowlist has no entries.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Whether `address` is allowlisted.
    pub fn contains(&self, address: &Address) -> bool {
        self.addresses.contains(address)
    }

    /// All tree levels over the allowlist.
    pub fn levels(&self) -> MerkleLevels {
        MerkleLevels::build(&self.leaves)
    }

    /// Root of the allowlist tree; [`MerkleRoot::Empty`] if there are no entries.
    pub fn root(&self) -> MerkleRoot {
        self.levels().root()
    }

    /// Proof bundle for `address`, or `None` when it is not allowlisted.
    pub fn proof_for(&self, address: &Address) -> Option<AllowlistProof> {
        let index = self.addresses.iter().position(|candidate| candidate == address)?;
        let levels = self.levels();
        let proof = levels.proof_for_index(index)?;

        Some(AllowlistProof { address: *address, leaf: self.leaves[index], proof, root: levels.root() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::compute_leaf;
    use alloy_primitives::{address, b256};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ALLOWLIST_JSON: &str = r#"[
        "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1",
        "  0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2  ",
        "0xCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCC3"
    ]"#;

    const EXPECTED_ROOT: B256 = b256!("0xce3509cb3618df0a73c4789b1e66e265d080f1178ae0cc199fb88550f4931640");

    fn config() -> AllowlistConfig {
        AllowlistConfig::default()
    }

    #[test]
    fn test_from_json_str_root() {
        let allowlist = Allowlist::from_json_str(ALLOWLIST_JSON, &config()).unwrap();
        assert_eq!(allowlist.len(), 3);
        assert_eq!(allowlist.root(), MerkleRoot::Hash(EXPECTED_ROOT));
    }

    #[test]
    fn test_member_proof_verifies() {
        let allowlist = Allowlist::from_json_str(ALLOWLIST_JSON, &config()).unwrap();
        let member = address!("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2");

        let proof = allowlist.proof_for(&member).unwrap();
        assert_eq!(proof.leaf, compute_leaf("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2").unwrap());
        assert_eq!(proof.root, MerkleRoot::Hash(EXPECTED_ROOT));
        assert!(proof.verify());
        assert_eq!(proof.compute_root(), EXPECTED_ROOT);
    }

    #[test]
    fn test_non_member_has_no_proof() {
        let allowlist = Allowlist::from_json_str(ALLOWLIST_JSON, &config()).unwrap();
        let outsider = Address::repeat_byte(0xdd);
        assert!(!allowlist.contains(&outsider));
        assert!(allowlist.proof_for(&outsider).is_none());
    }

    #[test]
    fn test_blank_and_non_string_entries_are_skipped() {
        let json = r#"["", 42, null, "  ", "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1"]"#;
        let allowlist = Allowlist::from_json_str(json, &config()).unwrap();
        assert_eq!(allowlist.addresses(), &[address!("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1")]);
    }

    #[test]
    fn test_malformed_entry_reports_index() {
        let json = r#"["0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1", "0x1234"]"#;
        let err = Allowlist::from_json_str(json, &config()).unwrap_err();
        assert!(matches!(err, AllowlistError::InvalidEntry { index: 1, .. }), "{err}");
    }

    #[test]
    fn test_non_array_document() {
        let err = Allowlist::from_json_str(r#"{"addresses": []}"#, &config()).unwrap_err();
        assert!(matches!(err, AllowlistError::NotAnArray));

        let err = Allowlist::from_json_str("not json", &config()).unwrap_err();
        assert!(matches!(err, AllowlistError::Json(_)));
    }

    #[test]
    fn test_empty_allowlist_has_empty_root() {
        let allowlist = Allowlist::from_json_str("[]", &config()).unwrap();
        assert!(allowlist.is_empty());
        assert_eq!(allowlist.root(), MerkleRoot::Empty);
    }

    #[test]
    fn test_entry_bound() {
        let bounded = AllowlistConfig { max_entries: 2 };
        let err = Allowlist::from_json_str(ALLOWLIST_JSON, &bounded).unwrap_err();
        assert!(matches!(err, AllowlistError::TooManyEntries { count: 3, max: 2 }));
    }

    #[test]
    fn test_from_comma_separated_matches_json() {
        let list = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1, 0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB2,\
                    0xCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCC3,";
        let from_list = Allowlist::from_comma_separated(list, &config()).unwrap();
        let from_json = Allowlist::from_json_str(ALLOWLIST_JSON, &config()).unwrap();
        assert_eq!(from_list, from_json);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let list = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1,0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1";
        let allowlist = Allowlist::from_comma_separated(list, &config()).unwrap();
        assert_eq!(allowlist.len(), 2);

        let proof = allowlist.proof_for(&allowlist.addresses()[0]).unwrap();
        assert_eq!(proof.proof, vec![allowlist.leaves()[0]]);
        assert!(proof.verify());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ALLOWLIST_JSON.as_bytes()).unwrap();

        let allowlist = Allowlist::from_json_file(file.path(), &config()).unwrap();
        assert_eq!(allowlist.root(), MerkleRoot::Hash(EXPECTED_ROOT));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Allowlist::from_json_file(dir.path().join("allowlist.json"), &config()).unwrap_err();
        assert!(matches!(err, AllowlistError::Io { .. }));
    }
}
