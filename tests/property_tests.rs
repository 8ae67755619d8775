//! Property-based tests for the theorem search.
//!
//! Random axioms over the MIU alphabet and random small rule sets are searched
//! and the resulting trees are checked against the structural laws of a
//! breadth-first derivation tree.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use theoremtree::prelude::*;

// ============================================================================
// Helper functions
// ============================================================================

/// Shortest derivation depth of every string reachable within `max_level`
/// steps, by enumerating every rule sequence without deduplication.
fn exhaustive_depths(axiom: &str, rules: &RuleSet, max_level: usize) -> HashMap<String, usize> {
    fn walk(value: &str, depth: usize, rules: &RuleSet, max_level: usize, out: &mut HashMap<String, usize>) {
        let best = out.entry(value.to_string()).or_insert(depth);
        if depth < *best {
            *best = depth;
        }
        if depth == max_level {
            return;
        }
        for succ in rules.successors(value) {
            walk(&succ.value, depth + 1, rules, max_level, out);
        }
    }
    let mut out = HashMap::new();
    walk(axiom, 0, rules, max_level, &mut out);
    out
}

fn miu_string() -> impl Strategy<Value = String> {
    "[MIU]{0,6}"
}

fn rule_spec() -> impl Strategy<Value = RuleSpec> {
    prop_oneof![
        ("[ab]{0,2}", "[ab]{0,2}").prop_map(|(suffix, append)| RuleSpec::AppendIfEndsWith { suffix, append }),
        "[ab]{0,1}".prop_map(|prefix| RuleSpec::DuplicateAfterPrefix { prefix }),
        ("[ab]{1,2}", "[ab]{0,1}").prop_map(|(pattern, replacement)| RuleSpec::ReplaceFirst { pattern, replacement }),
    ]
}

fn rule_set() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec(rule_spec(), 0..4)
        .prop_map(|specs| specs.into_iter().map(RuleDef::new).collect::<Vec<_>>())
        .prop_map(|defs| RuleSet::from_defs(&defs))
}

// ============================================================================
// MIU system properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deterministic(axiom in miu_string(), depth in 0usize..4) {
        let rules = RuleSet::default_miu();
        let a = search(&axiom, &rules, depth);
        let b = search(&axiom, &rules, depth);
        let shape = |t: &TheoremTree| -> Vec<(String, usize, Option<TheoremId>)> {
            t.nodes().map(|(_, n)| (n.value.clone(), n.level, n.parent)).collect()
        };
        prop_assert_eq!(shape(&a), shape(&b));
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn prop_levels_are_minimal(axiom in miu_string(), depth in 0usize..4) {
        let rules = RuleSet::default_miu();
        let tree = search(&axiom, &rules, depth);
        let depths = exhaustive_depths(&axiom, &rules, depth);
        // Same reachable set, same shortest depths.
        prop_assert_eq!(depths.len(), tree.len());
        for (_, node) in tree.nodes() {
            prop_assert_eq!(depths.get(&node.value), Some(&node.level));
        }
    }

    #[test]
    fn prop_levels_non_decreasing(axiom in miu_string(), depth in 0usize..5) {
        let tree = search(&axiom, &RuleSet::default_miu(), depth);
        let levels: Vec<usize> = tree.nodes().map(|(_, n)| n.level).collect();
        prop_assert!(levels.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(tree.depth() <= depth);
    }
}

// ============================================================================
// Arbitrary rule sets
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_tree_laws(axiom in "[ab]{0,4}", rules in rule_set(), depth in 0usize..4) {
        let tree = search(&axiom, &rules, depth);
        prop_assert_eq!(tree.axiom(), axiom.as_str());
        prop_assert!(tree.root().parent.is_none());

        let mut seen = HashSet::new();
        for (id, node) in tree.nodes() {
            prop_assert!(seen.insert(node.value.clone()), "duplicate {}", node.value);
            if let Some(parent) = node.parent {
                prop_assert_eq!(tree[parent].level + 1, node.level);
                prop_assert!(tree[parent].children.contains(&id));
            } else {
                prop_assert_eq!(id, TheoremTree::ROOT);
            }
            let path = tree.path_to(id);
            prop_assert_eq!(path.len(), node.level + 1);
            for pair in path.windows(2) {
                prop_assert!(rules.derives(pair[0], pair[1]).is_some());
            }
        }
        prop_assert_eq!(tree.bfs().count(), tree.len());
        prop_assert_eq!(tree.dfs().count(), tree.len());
    }

    #[test]
    fn prop_no_rules_is_single_node(axiom in "[ab]{0,4}", depth in 0usize..10) {
        let tree = search(&axiom, &RuleSet::default(), depth);
        prop_assert_eq!(tree.len(), 1);
    }

    #[test]
    fn prop_negative_depth_rejected(depth in i64::MIN..0) {
        prop_assert_eq!(
            search_checked("MI", &RuleSet::default_miu(), depth).unwrap_err(),
            SearchError::NegativeMaxLevel(depth)
        );
    }
}
