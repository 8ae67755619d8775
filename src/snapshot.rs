//! Serializable export of a completed theorem tree.
//!
//! A `TreeSnapshot` is a flat, self-describing copy of the tree for display
//! tools that do not link against this crate. Nodes appear in creation order,
//! so a consumer can rebuild parent/child links with a single pass.

use crate::arena::TheoremId;
use crate::tree::TheoremTree;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serialization failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CBOR serialization failed: {0}")]
    Cbor(#[from] serde_cbor::Error),
}

/// One node of an exported tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: TheoremId,
    pub value: String,
    pub level: usize,
    #[serde(default)]
    pub parent: Option<TheoremId>,
    /// Index into `TreeSnapshot::rules` of the producing rule.
    #[serde(default)]
    pub rule: Option<usize>,
    #[serde(default)]
    pub children: Vec<TheoremId>,
}

/// Flat export of a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub axiom: String,
    pub max_level: usize,
    /// Rule names in application order.
    pub rules: Vec<String>,
    /// Hex SHA-256 fingerprint of the tree.
    pub fingerprint: String,
    pub nodes: Vec<NodeRecord>,
}

impl TreeSnapshot {
    /// Captures `tree`.
    pub fn capture(tree: &TheoremTree) -> Self {
        let nodes = tree
            .nodes()
            .map(|(id, node)| NodeRecord {
                id,
                value: node.value.clone(),
                level: node.level,
                parent: node.parent,
                rule: node.rule.map(|r| r.0),
                children: node.children.clone(),
            })
            .collect();
        Self {
            axiom: tree.axiom().to_string(),
            max_level: tree.max_level(),
            rules: tree.rule_names().to_vec(),
            fingerprint: tree.fingerprint().to_hex(),
            nodes,
        }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes to CBOR bytes.
    pub fn to_cbor(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(serde_cbor::from_slice(bytes)?)
    }
}

impl From<&TheoremTree> for TreeSnapshot {
    fn from(tree: &TheoremTree) -> Self {
        Self::capture(tree)
    }
}
