//! Rule engine for string-rewrite (post-production) systems.
//!
//! A rule is a pair of pure functions over strings: a predicate deciding
//! whether the rule applies, and a transform producing the single rewritten
//! string. A [`RuleSet`] is an ordered list of rules; its order defines the
//! order in which successors are produced and therefore the child order of the
//! theorem tree.
//!
//! The engine is stateless. It knows nothing about search history, so the same
//! string may appear more than once among the successors of a theorem;
//! deduplication is the search driver's job.
//!
//! # Citations
//! - Post, "Formal reductions of the general combinatorial decision problem" (1943)
//! - Hofstadter, "Gödel, Escher, Bach", ch. 1, "The MU-puzzle" (1979)

pub mod declarative;

pub use declarative::{Alphabet, RuleDef, RuleSpec};

use std::fmt;
use std::sync::Arc;

/// Predicate half of a rule.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Transform half of a rule.
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Position of a rule within its [`RuleSet`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleIndex(pub usize);

impl fmt::Display for RuleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.0)
    }
}

/// A single deterministic rewrite rule.
///
/// Cloning is cheap: both halves are reference counted.
#[derive(Clone)]
pub struct Rule {
    name: String,
    predicate: Predicate,
    transform: Transform,
}

impl Rule {
    /// Creates a rule from a predicate and a transform.
    pub fn new<P, T>(name: impl Into<String>, predicate: P, transform: T) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
        T: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            transform: Arc::new(transform),
        }
    }

    /// Returns the display name of this rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the rule's predicate holds for `theorem`.
    #[inline]
    pub fn is_applicable(&self, theorem: &str) -> bool {
        (self.predicate)(theorem)
    }

    /// Applies the rule once, returning `None` when it does not apply.
    #[inline]
    pub fn apply(&self, theorem: &str) -> Option<String> {
        if self.is_applicable(theorem) {
            Some((self.transform)(theorem))
        } else {
            None
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A candidate successor produced by one rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    /// Rule that produced the value.
    pub rule: RuleIndex,
    /// The rewritten string.
    pub value: String,
}

/// Returns the successors of `theorem` under `rules`, in rule order.
///
/// Each applicable rule contributes exactly one successor. Inapplicable rules
/// contribute nothing, so a dead-end theorem yields an empty vector.
pub fn successors(theorem: &str, rules: &[Rule]) -> Vec<Successor> {
    rules
        .iter()
        .enumerate()
        .filter_map(|(idx, rule)| {
            rule.apply(theorem).map(|value| Successor {
                rule: RuleIndex(idx),
                value,
            })
        })
        .collect()
}

/// An ordered collection of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set from rules in application order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The four rules of the MIU system over the given alphabet.
    ///
    /// 0. `xI → xIU`
    /// 1. `Mx → Mxx`
    /// 2. first `III` → `U`
    /// 3. first `UU` removed
    pub fn miu(alphabet: &Alphabet) -> Self {
        Self::from_defs(&RuleDef::miu(alphabet))
    }

    /// The MIU rules over the standard `M`, `I`, `U` alphabet.
    pub fn default_miu() -> Self {
        Self::miu(&Alphabet::default())
    }

    /// Compiles declarative rule definitions into a rule set.
    ///
    /// Unnamed definitions are called `rule_<n>` after their position.
    pub fn from_defs(defs: &[RuleDef]) -> Self {
        let rules = defs
            .iter()
            .enumerate()
            .map(|(idx, def)| {
                let name = def.name.clone().unwrap_or_else(|| format!("rule_{idx}"));
                def.spec.compile(name)
            })
            .collect();
        Self { rules }
    }

    /// Appends a rule at the end of the application order.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Returns the rules in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the rule at `index`, if any.
    pub fn get(&self, index: RuleIndex) -> Option<&Rule> {
        self.rules.get(index.0)
    }

    /// Returns the rule names in application order.
    pub fn names(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Successors of `theorem`, in rule order. See [`successors`].
    pub fn successors(&self, theorem: &str) -> Vec<Successor> {
        successors(theorem, &self.rules)
    }

    /// Returns the first rule whose single application turns `from` into `to`.
    pub fn derives(&self, from: &str, to: &str) -> Option<RuleIndex> {
        self.rules
            .iter()
            .position(|rule| rule.apply(from).as_deref() == Some(to))
            .map(RuleIndex)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
