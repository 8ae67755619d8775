//! The theorem tree produced by a search.
//!
//! Nodes live in a [`NodeArena`]; each node owns the ordered list of its
//! children's ids and holds a non-owning parent id. Because every node is
//! allocated while its level is being expanded, arena order is exactly
//! breadth-first discovery order.
//!
//! # Invariants
//! - Node values are unique; `index` maps each value to its node.
//! - The root holds the axiom at level 0 and has no parent.
//! - Every other node has exactly one parent, one level above it.
//! - Nodes are never removed; only `children` grows after allocation.

pub mod traverse;

pub use traverse::{Bfs, Dfs};

use crate::arena::{NodeArena, TheoremId};
use crate::fingerprint::{tree_fingerprint, HashValue};
use crate::rules::RuleIndex;
use crate::search::SearchStats;
use std::collections::{BTreeMap, HashMap};

/// One unique derived string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheoremNode {
    /// The theorem itself; its identity within the tree.
    pub value: String,
    /// Number of rule applications from the axiom.
    pub level: usize,
    /// Node this one was first derived from. `None` only for the root.
    pub parent: Option<TheoremId>,
    /// Rule that derived this node from its parent.
    pub rule: Option<RuleIndex>,
    /// Children in discovery order.
    pub children: Vec<TheoremId>,
}

impl TheoremNode {
    pub(crate) fn root(axiom: String) -> Self {
        Self {
            value: axiom,
            level: 0,
            parent: None,
            rule: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn derived(value: String, level: usize, parent: TheoremId, rule: RuleIndex) -> Self {
        Self {
            value,
            level,
            parent: Some(parent),
            rule: Some(rule),
            children: Vec::new(),
        }
    }

    /// Returns `true` if nothing was derived from this node.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl std::fmt::Display for TheoremNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Theorem('{}', level={})", self.value, self.level)
    }
}

/// One step of a derivation: the value reached and the rule used to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationStep<'a> {
    pub value: &'a str,
    /// `None` for the axiom.
    pub rule: Option<RuleIndex>,
}

/// A completed derivation tree.
#[derive(Debug, Clone)]
pub struct TheoremTree {
    nodes: NodeArena<TheoremNode>,
    index: HashMap<String, TheoremId>,
    rule_names: Vec<String>,
    max_level: usize,
    stats: SearchStats,
}

impl TheoremTree {
    /// Id of the root node. The axiom is always allocated first.
    pub const ROOT: TheoremId = TheoremId::new(0);

    pub(crate) fn with_root(axiom: &str, rule_names: Vec<String>, max_level: usize) -> Self {
        let mut nodes = NodeArena::new();
        let root = nodes.allocate(TheoremNode::root(axiom.to_string()));
        let mut index = HashMap::new();
        index.insert(axiom.to_string(), root);
        Self {
            nodes,
            index,
            rule_names,
            max_level,
            stats: SearchStats::default(),
        }
    }

    /// Allocates a child of `parent` unless `value` is already present.
    ///
    /// Returns the new id, or `None` for a duplicate. Check and insert happen
    /// together so the first producer always wins the parent slot.
    pub(crate) fn insert_child(
        &mut self,
        parent: TheoremId,
        value: String,
        rule: RuleIndex,
    ) -> Option<TheoremId> {
        if self.index.contains_key(&value) {
            return None;
        }
        let level = self.nodes[parent].level + 1;
        let id = self
            .nodes
            .allocate(TheoremNode::derived(value.clone(), level, parent, rule));
        self.index.insert(value, id);
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(id);
        }
        Some(id)
    }

    pub(crate) fn set_stats(&mut self, stats: SearchStats) {
        self.stats = stats;
    }

    /// The root node, holding the axiom.
    pub fn root(&self) -> &TheoremNode {
        &self.nodes[Self::ROOT]
    }

    pub fn axiom(&self) -> &str {
        &self.root().value
    }

    pub fn get(&self, id: TheoremId) -> Option<&TheoremNode> {
        self.nodes.get(id)
    }

    /// Looks up the node holding `value`.
    pub fn find(&self, value: &str) -> Option<TheoremId> {
        self.index.get(value).copied()
    }

    /// Number of unique theorems, including the axiom.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its axiom.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth bound the search was run with.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Deepest level that holds at least one theorem.
    pub fn depth(&self) -> usize {
        self.nodes.iter().next_back().map_or(0, |(_, node)| node.level)
    }

    pub fn rule_names(&self) -> &[String] {
        &self.rule_names
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// All nodes in creation (breadth-first discovery) order.
    pub fn nodes(&self) -> impl Iterator<Item = (TheoremId, &TheoremNode)> {
        self.nodes.iter()
    }

    /// Nodes with no children.
    pub fn leaves(&self) -> impl Iterator<Item = (TheoremId, &TheoremNode)> {
        self.nodes.iter().filter(|(_, node)| node.is_leaf())
    }

    /// Theorem values grouped by level, each level in discovery order.
    pub fn levels(&self) -> BTreeMap<usize, Vec<&str>> {
        let mut by_level: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for (_, node) in self.nodes.iter() {
            by_level.entry(node.level).or_default().push(&node.value);
        }
        by_level
    }

    /// Values at `level`, in discovery order.
    pub fn level(&self, level: usize) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.level == level)
            .map(|(_, node)| node.value.as_str())
            .collect()
    }

    /// Values from the axiom to `id`, inclusive.
    ///
    /// Returns an empty vector for an id that is not in this tree.
    pub fn path_to(&self, id: TheoremId) -> Vec<&str> {
        self.derivation(id).into_iter().map(|step| step.value).collect()
    }

    /// Values from the axiom to the node holding `value`, if there is one.
    pub fn path_to_value(&self, value: &str) -> Option<Vec<&str>> {
        self.find(value).map(|id| self.path_to(id))
    }

    /// The derivation of `id`: each value on the root path with the rule that
    /// produced it.
    pub fn derivation(&self, id: TheoremId) -> Vec<DerivationStep<'_>> {
        let mut steps = Vec::new();
        let mut current = self.nodes.get(id);
        while let Some(node) = current {
            steps.push(DerivationStep {
                value: &node.value,
                rule: node.rule,
            });
            current = node.parent.and_then(|p| self.nodes.get(p));
        }
        steps.reverse();
        steps
    }

    /// Breadth-first traversal from the root.
    pub fn bfs(&self) -> Bfs<'_> {
        Bfs::new(self, Self::ROOT)
    }

    /// Depth-first pre-order traversal from the root.
    pub fn dfs(&self) -> Dfs<'_> {
        Dfs::new(self, Self::ROOT)
    }

    /// Deterministic digest of values, levels, and parent links.
    pub fn fingerprint(&self) -> HashValue {
        tree_fingerprint(self)
    }
}

impl std::ops::Index<TheoremId> for TheoremTree {
    type Output = TheoremNode;

    fn index(&self, id: TheoremId) -> &TheoremNode {
        &self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// MI → {MIU, MII}, MII → MIIU, built by hand.
    fn small_tree() -> TheoremTree {
        let mut tree = TheoremTree::with_root("MI", vec!["r0".into(), "r1".into()], 2);
        let miu = tree.insert_child(TheoremTree::ROOT, "MIU".into(), RuleIndex(0));
        let mii = tree.insert_child(TheoremTree::ROOT, "MII".into(), RuleIndex(1));
        assert!(miu.is_some());
        let mii = mii.expect("MII is new");
        tree.insert_child(mii, "MIIU".into(), RuleIndex(0));
        tree
    }

    #[test]
    fn insert_child_links_both_ways() {
        let tree = small_tree();
        assert_eq!(tree.len(), 4);
        let mii = tree.find("MII").expect("MII present");
        let miiu = tree.find("MIIU").expect("MIIU present");
        assert_eq!(tree[miiu].parent, Some(mii));
        assert_eq!(tree[miiu].level, 2);
        assert_eq!(tree[mii].children, vec![miiu]);
        assert!(tree[miiu].is_leaf());
        assert!(tree.root().is_root());
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut tree = small_tree();
        let miu = tree.find("MIU").expect("MIU present");
        assert_eq!(tree.insert_child(miu, "MII".into(), RuleIndex(1)), None);
        assert_eq!(tree.insert_child(miu, "MI".into(), RuleIndex(0)), None);
        assert_eq!(tree.len(), 4);
        assert!(tree[miu].children.is_empty());
    }

    #[test]
    fn levels_and_paths() {
        let tree = small_tree();
        let levels = tree.levels();
        assert_eq!(levels[&0], vec!["MI"]);
        assert_eq!(levels[&1], vec!["MIU", "MII"]);
        assert_eq!(levels[&2], vec!["MIIU"]);
        assert_eq!(tree.level(1), vec!["MIU", "MII"]);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.path_to_value("MIIU"), Some(vec!["MI", "MII", "MIIU"]));
        assert_eq!(tree.path_to(TheoremTree::ROOT), vec!["MI"]);
        assert_eq!(tree.path_to_value("MU"), None);
        assert!(tree.path_to(TheoremId::new(99)).is_empty());
    }

    #[test]
    fn derivation_records_rules() {
        let tree = small_tree();
        let id = tree.find("MIIU").expect("MIIU present");
        let steps = tree.derivation(id);
        assert_eq!(
            steps,
            vec![
                DerivationStep { value: "MI", rule: None },
                DerivationStep { value: "MII", rule: Some(RuleIndex(1)) },
                DerivationStep { value: "MIIU", rule: Some(RuleIndex(0)) },
            ]
        );
    }

    #[test]
    fn leaves_in_discovery_order() {
        let tree = small_tree();
        let leaves: Vec<_> = tree.leaves().map(|(_, n)| n.value.as_str()).collect();
        assert_eq!(leaves, vec!["MIU", "MIIU"]);
    }

    #[test]
    fn node_display() {
        let tree = small_tree();
        assert_eq!(tree.root().to_string(), "Theorem('MI', level=0)");
    }
}
