//! Breadth-first theorem search.
//!
//! The driver expands the tree one level at a time. For every node of the
//! current frontier, in frontier order, it asks the rule engine for successors
//! in rule order and keeps each one whose value has not been seen anywhere in
//! the search so far. Survivors become children of the node that produced
//! them and form the next frontier.
//!
//! # Determinism
//! - Frontier order is discovery order; candidate order is rule order.
//! - The seen check is made per candidate, so when several producers reach
//!   the same string in one round the first one in frontier-then-rule order
//!   becomes its parent.
//! - A level is fully materialized before the next one is expanded, which
//!   makes each node's level its shortest derivation depth.

use crate::arena::TheoremId;
use crate::rules::RuleSet;
use crate::tree::TheoremTree;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Invalid arguments rejected before any node is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("max_level must be non-negative, got {0}")]
    NegativeMaxLevel(i64),
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// Reached the configured depth bound.
    #[default]
    DepthBound,
    /// A level produced no new theorems.
    FixedPoint,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::DepthBound => write!(f, "depth bound"),
            Termination::FixedPoint => write!(f, "fixed point"),
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Successors produced by the rule engine, duplicates included.
    pub candidates: usize,
    /// Candidates dropped because their value was already in the tree.
    pub duplicates: usize,
    /// Number of levels expanded.
    pub levels_expanded: usize,
    pub termination: Termination,
}

/// Per-call search state: the growing tree (which owns the seen index) and the
/// frontier of the level being expanded.
struct Driver<'r> {
    rules: &'r RuleSet,
    tree: TheoremTree,
    frontier: Vec<TheoremId>,
    stats: SearchStats,
}

impl<'r> Driver<'r> {
    fn new(axiom: &str, rules: &'r RuleSet, max_level: usize) -> Self {
        Self {
            rules,
            tree: TheoremTree::with_root(axiom, rules.names(), max_level),
            frontier: vec![TheoremTree::ROOT],
            stats: SearchStats::default(),
        }
    }

    /// Expands the current frontier into the next level.
    fn expand_level(&mut self) {
        let mut next = Vec::new();
        for &id in &self.frontier {
            let candidates = self.rules.successors(&self.tree[id].value);
            self.stats.candidates += candidates.len();
            for candidate in candidates {
                match self.tree.insert_child(id, candidate.value, candidate.rule) {
                    Some(child) => next.push(child),
                    None => {
                        self.stats.duplicates += 1;
                        trace!(parent = %id, rule = %candidate.rule, "skipped known theorem");
                    }
                }
            }
        }
        self.frontier = next;
    }

    fn run(mut self) -> TheoremTree {
        let max_level = self.tree.max_level();
        let mut level = 0;
        while level < max_level && !self.frontier.is_empty() {
            self.expand_level();
            level += 1;
            self.stats.levels_expanded = level;
            debug!(level, discovered = self.frontier.len(), "expanded frontier");
        }
        self.stats.termination = if self.frontier.is_empty() {
            Termination::FixedPoint
        } else {
            Termination::DepthBound
        };
        info!(
            theorems = self.tree.len(),
            duplicates = self.stats.duplicates,
            termination = %self.stats.termination,
            "search finished"
        );
        self.tree.set_stats(self.stats);
        self.tree
    }
}

/// Builds the theorem tree of `axiom` under `rules`, at most `max_level`
/// rule applications deep.
///
/// Never fails: `max_level == 0`, empty rules, and an axiom with no
/// successors all yield a tree holding only the axiom.
pub fn search(axiom: &str, rules: &RuleSet, max_level: usize) -> TheoremTree {
    debug!(axiom, rules = rules.len(), max_level, "starting search");
    Driver::new(axiom, rules, max_level).run()
}

/// Like [`search`], for callers holding a signed depth.
///
/// A negative `max_level` is rejected before anything is built.
pub fn search_checked(axiom: &str, rules: &RuleSet, max_level: i64) -> Result<TheoremTree, SearchError> {
    let max_level = usize::try_from(max_level).map_err(|_| SearchError::NegativeMaxLevel(max_level))?;
    Ok(search(axiom, rules, max_level))
}
