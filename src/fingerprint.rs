//! Deterministic fingerprints of theorem trees.
//!
//! A tree's fingerprint covers every node's value, level, producing rule and
//! parent, in creation order. Two searches with the same axiom, rules and
//! depth bound must produce the same fingerprint; any difference in discovery
//! order or parent assignment changes it.
//!
//! # Citations
//! - SHA-256: NIST FIPS 180-4 (2015)
//! - Domain separation & length prefixing: Bernstein et al., "How to hash into elliptic curves" (2009)

use crate::tree::TheoremTree;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// A 256-bit hash value.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashValue(pub [u8; 32]);

impl HashValue {
    /// Creates a zero hash (all zeros).
    #[inline]
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns the raw byte array.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Computes SHA-256 of the given data with domain separation.
    ///
    /// The hashed message is `b"TT:<domain>:v1" || len(data) as u64 LE || data`.
    pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"TT:");
        hasher.update(domain);
        hasher.update(b":v1");
        hasher.update((data.len() as u64).to_le_bytes());
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Full lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(64);
        for byte in self.0 {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl std::fmt::Display for HashValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 4 bytes are enough to tell runs apart by eye.
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

const NO_PARENT: u32 = u32::MAX;
const NO_RULE: u64 = u64::MAX;

/// Canonical bytes of a tree, in creation order.
///
/// Per node: level (u64 LE), rule (u64 LE, `u64::MAX` for the root), parent
/// (u32 LE, `u32::MAX` for the root), value length (u64 LE), value bytes.
pub fn canonical_bytes(tree: &TheoremTree) -> Vec<u8> {
    let mut out = Vec::with_capacity(16 + tree.len() * 32);
    out.extend_from_slice(&(tree.max_level() as u64).to_le_bytes());
    out.extend_from_slice(&(tree.len() as u64).to_le_bytes());
    for (_, node) in tree.nodes() {
        out.extend_from_slice(&(node.level as u64).to_le_bytes());
        let rule = node.rule.map_or(NO_RULE, |r| r.0 as u64);
        out.extend_from_slice(&rule.to_le_bytes());
        let parent = node.parent.map_or(NO_PARENT, |p| p.as_u32());
        out.extend_from_slice(&parent.to_le_bytes());
        out.extend_from_slice(&(node.value.len() as u64).to_le_bytes());
        out.extend_from_slice(node.value.as_bytes());
    }
    out
}

/// Fingerprint of a completed tree.
pub fn tree_fingerprint(tree: &TheoremTree) -> HashValue {
    HashValue::hash_with_domain(b"THEOREM_TREE", &canonical_bytes(tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use crate::search::search;

    #[test]
    fn domain_separation() {
        let a = HashValue::hash_with_domain(b"A", b"data");
        let b = HashValue::hash_with_domain(b"B", b"data");
        assert_ne!(a, b);
        assert_ne!(a, HashValue::zero());
        assert_eq!(a, HashValue::hash_with_domain(b"A", b"data"));
    }

    #[test]
    fn hex_and_display() {
        let zero = HashValue::zero();
        assert_eq!(zero.to_hex(), "0".repeat(64));
        assert_eq!(zero.to_string(), "00000000…");
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let rules = RuleSet::default_miu();
        let a = search("MI", &rules, 4).fingerprint();
        let b = search("MI", &rules, 4).fingerprint();
        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_tracks_structure() {
        let rules = RuleSet::default_miu();
        let shallow = search("MI", &rules, 2).fingerprint();
        let deep = search("MI", &rules, 3).fingerprint();
        let other = search("MII", &rules, 2).fingerprint();
        assert_ne!(shallow, deep);
        assert_ne!(shallow, other);
    }
}
