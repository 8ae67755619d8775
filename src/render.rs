//! Text rendering of theorem trees.
//!
//! These functions only read the tree. They produce the report layouts of the
//! command-line tool: an indented tree, a by-level listing, sample derivation
//! paths and search statistics.

use crate::tree::TheoremTree;
use std::fmt::Write as _;

/// Indentation unit per level of the tree view.
const INDENT: &str = "  ";

/// Indented tree, one node per line, in depth-first pre-order.
///
/// ```text
/// ├─ MI (level 0)
///   ├─ MIU (level 1)
/// ```
pub fn tree_structure(tree: &TheoremTree) -> String {
    let mut out = String::new();
    for (_, node) in tree.dfs() {
        let _ = writeln!(out, "{}├─ {} (level {})", INDENT.repeat(node.level), node.value, node.level);
    }
    out
}

/// One line per level: `Level 1: ['MIU', 'MII']`.
pub fn theorems_by_level(tree: &TheoremTree) -> String {
    let mut out = String::new();
    for (level, values) in tree.levels() {
        let _ = writeln!(out, "Level {level}: {}", quoted_list(&values));
    }
    out
}

/// `['a', 'b']`, with `\` and `'` escaped.
fn quoted_list(values: &[&str]) -> String {
    let mut out = String::from("[");
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        for ch in value.chars() {
            if matches!(ch, '\\' | '\'') {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push('\'');
    }
    out.push(']');
    out
}

/// Derivation paths of the first `count` theorems at level `min_level` or deeper,
/// in depth-first order.
pub fn sample_paths(tree: &TheoremTree, min_level: usize, count: usize) -> String {
    let mut out = String::new();
    for (id, node) in tree.dfs().filter(|(_, node)| node.level >= min_level).take(count) {
        let _ = writeln!(out, "Path to '{}': {}", node.value, tree.path_to(id).join(" -> "));
    }
    out
}

/// Single-line summary.
pub fn summary(tree: &TheoremTree) -> String {
    format!("Total unique theorems generated: {}\n", tree.len())
}

/// Search statistics and fingerprint.
pub fn statistics(tree: &TheoremTree) -> String {
    let stats = tree.stats();
    let mut out = String::new();
    let _ = writeln!(out, "Axiom: {}", tree.axiom());
    let _ = writeln!(out, "Rules: {}", tree.rule_names().join(", "));
    let _ = writeln!(out, "Depth bound: {}", tree.max_level());
    let _ = writeln!(out, "Levels expanded: {}", stats.levels_expanded);
    let _ = writeln!(out, "Candidates: {} ({} duplicates skipped)", stats.candidates, stats.duplicates);
    let _ = writeln!(out, "Stopped at: {}", stats.termination);
    let _ = writeln!(out, "Fingerprint: {}", tree.fingerprint().to_hex());
    out
}

/// Full report: summary, tree, levels and sample paths under section headers.
pub fn report(tree: &TheoremTree, min_level: usize, samples: usize) -> String {
    let mut out = String::new();
    out.push_str("=== Theorem Generation ===\n");
    out.push_str(&summary(tree));
    out.push('\n');
    out.push_str("=== Tree Structure ===\n");
    out.push_str(&tree_structure(tree));
    out.push('\n');
    out.push_str("=== Theorems by Level ===\n");
    out.push_str(&theorems_by_level(tree));
    out.push('\n');
    out.push_str("=== Sample Derivation Paths ===\n");
    out.push_str(&sample_paths(tree, min_level, samples));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use crate::search::search;

    #[test]
    fn tree_view() {
        let tree = search("MI", &RuleSet::default_miu(), 2);
        let expected = "\
├─ MI (level 0)
  ├─ MIU (level 1)
    ├─ MIUIU (level 2)
  ├─ MII (level 1)
    ├─ MIIU (level 2)
    ├─ MIIII (level 2)
";
        assert_eq!(tree_structure(&tree), expected);
    }

    #[test]
    fn level_view() {
        let tree = search("MI", &RuleSet::default_miu(), 2);
        assert_eq!(
            theorems_by_level(&tree),
            "Level 0: ['MI']\nLevel 1: ['MIU', 'MII']\nLevel 2: ['MIUIU', 'MIIU', 'MIIII']\n"
        );
    }

    #[test]
    fn level_view_escapes_quotes() {
        assert_eq!(quoted_list(&[]), "[]");
        assert_eq!(quoted_list(&["it's", "a\\b"]), "['it\\'s', 'a\\\\b']");
    }

    #[test]
    fn sample_path_view() {
        let tree = search("MI", &RuleSet::default_miu(), 4);
        assert_eq!(
            sample_paths(&tree, 2, 3),
            "Path to 'MIUIU': MI -> MIU -> MIUIU\n\
             Path to 'MIUIUIUIU': MI -> MIU -> MIUIU -> MIUIUIUIU\n\
             Path to 'MIUIUIUIUIUIUIUIU': MI -> MIU -> MIUIU -> MIUIUIUIU -> MIUIUIUIUIUIUIUIU\n"
        );
        assert_eq!(sample_paths(&tree, 9, 3), "");
    }

    #[test]
    fn report_sections() {
        let tree = search("MI", &RuleSet::default_miu(), 4);
        let text = report(&tree, 2, 3);
        assert!(text.starts_with("=== Theorem Generation ===\nTotal unique theorems generated: 19\n"));
        for header in ["=== Tree Structure ===", "=== Theorems by Level ===", "=== Sample Derivation Paths ==="] {
            assert!(text.contains(header), "missing {header}");
        }
        assert!(statistics(&tree).contains("Stopped at: depth bound"));
    }
}
