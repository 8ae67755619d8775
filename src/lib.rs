//! theoremtree: breadth-first theorem generation for string-rewrite systems.
//!
//! Starting from an axiom, the search applies an ordered list of rewrite rules
//! level by level, records every newly derived string once, and links it to
//! the theorem it was first derived from. The result is a [`TheoremTree`]
//! whose node levels are shortest derivation depths.
//!
//! This crate provides:
//! - a stateless rule engine ([`rules`]) with the MIU system as default,
//! - the search driver ([`search`]) with global deduplication,
//! - an arena-backed tree ([`tree`]) with level views, derivation paths and
//!   lazy BFS/DFS traversals,
//! - deterministic fingerprints, JSON/CBOR snapshots, TOML configuration and
//!   text rendering for display tools.
//!
//! # References
//!
//! - Hofstadter, D. "Gödel, Escher, Bach" (1979), ch. 1 – the MU-puzzle
//! - Post, E. "Formal reductions of the general combinatorial decision problem" (1943)
//!
//! # Example
//!
//! ```
//! use theoremtree::prelude::*;
//!
//! let tree = search("MI", &RuleSet::default_miu(), 2);
//! assert_eq!(tree.level(1), vec!["MIU", "MII"]);
//! let id = tree.find("MIIII").unwrap();
//! assert_eq!(tree.path_to(id), vec!["MI", "MII", "MIIII"]);
//! ```

pub mod arena;
pub mod config;
pub mod fingerprint;
pub mod render;
pub mod rules;
pub mod search;
pub mod snapshot;
pub mod tree;

pub use arena::TheoremId;
pub use config::{ConfigError, SearchConfig};
pub use rules::{Alphabet, Rule, RuleDef, RuleIndex, RuleSet, RuleSpec, Successor};
pub use search::{search, search_checked, SearchError, SearchStats, Termination};
pub use snapshot::{SnapshotError, TreeSnapshot};
pub use tree::{DerivationStep, TheoremNode, TheoremTree};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::arena::TheoremId;
    pub use crate::config::SearchConfig;
    pub use crate::fingerprint::HashValue;
    pub use crate::rules::{successors, Alphabet, Rule, RuleDef, RuleIndex, RuleSet, RuleSpec, Successor};
    pub use crate::search::{search, search_checked, SearchError, Termination};
    pub use crate::snapshot::TreeSnapshot;
    pub use crate::tree::{DerivationStep, TheoremNode, TheoremTree};
}
