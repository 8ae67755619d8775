//! Declarative rule descriptions.
//!
//! `RuleSpec` is the serde-facing form of a rule, used by configuration files.
//! Compiling a spec captures its strings in the predicate and transform
//! closures of a [`Rule`].

use super::Rule;
use serde::{Deserialize, Serialize};

/// The designated symbols of the MIU system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Alphabet {
    pub m: char,
    pub i: char,
    pub u: char,
}

impl Alphabet {
    pub const fn new(m: char, i: char, u: char) -> Self {
        Self { m, i, u }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new('M', 'I', 'U')
    }
}

/// A single-output rewrite rule, described by data.
///
/// Empty affixes and patterns are accepted; they produce degenerate rules
/// (always applicable) rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum RuleSpec {
    /// If the string ends with `suffix`, append `append`.
    AppendIfEndsWith { suffix: String, append: String },
    /// If the string starts with `prefix`, append a copy of the remainder.
    DuplicateAfterPrefix { prefix: String },
    /// Replace the first occurrence of `pattern` with `replacement`.
    ReplaceFirst { pattern: String, replacement: String },
}

impl RuleSpec {
    /// Builds the executable rule for this spec.
    pub fn compile(&self, name: impl Into<String>) -> Rule {
        match self.clone() {
            RuleSpec::AppendIfEndsWith { suffix, append } => Rule::new(
                name,
                move |s| s.ends_with(suffix.as_str()),
                move |s| {
                    let mut out = String::with_capacity(s.len() + append.len());
                    out.push_str(s);
                    out.push_str(&append);
                    out
                },
            ),
            RuleSpec::DuplicateAfterPrefix { prefix } => {
                let skip = prefix.len();
                Rule::new(
                    name,
                    move |s| s.starts_with(prefix.as_str()),
                    move |s| {
                        let mut out = String::with_capacity(2 * s.len() - skip);
                        out.push_str(s);
                        out.push_str(&s[skip..]);
                        out
                    },
                )
            }
            RuleSpec::ReplaceFirst { pattern, replacement } => {
                let needle = pattern.clone();
                Rule::new(
                    name,
                    move |s| s.contains(needle.as_str()),
                    move |s| s.replacen(pattern.as_str(), &replacement, 1),
                )
            }
        }
    }
}

/// A rule spec with an optional display name.
///
/// Serialized flat: `name` sits beside `kind` and the variant's fields.
/// Keys outside that set are rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FlatRuleDef")]
pub struct RuleDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub spec: RuleSpec,
}

/// Wire form of [`RuleDef`]. `flatten` cannot reject unknown keys, so the
/// name is repeated in every variant instead.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
enum FlatRuleDef {
    AppendIfEndsWith {
        #[serde(default)]
        name: Option<String>,
        suffix: String,
        append: String,
    },
    DuplicateAfterPrefix {
        #[serde(default)]
        name: Option<String>,
        prefix: String,
    },
    ReplaceFirst {
        #[serde(default)]
        name: Option<String>,
        pattern: String,
        replacement: String,
    },
}

impl From<FlatRuleDef> for RuleDef {
    fn from(flat: FlatRuleDef) -> Self {
        match flat {
            FlatRuleDef::AppendIfEndsWith { name, suffix, append } => RuleDef {
                name,
                spec: RuleSpec::AppendIfEndsWith { suffix, append },
            },
            FlatRuleDef::DuplicateAfterPrefix { name, prefix } => RuleDef {
                name,
                spec: RuleSpec::DuplicateAfterPrefix { prefix },
            },
            FlatRuleDef::ReplaceFirst {
                name,
                pattern,
                replacement,
            } => RuleDef {
                name,
                spec: RuleSpec::ReplaceFirst { pattern, replacement },
            },
        }
    }
}

impl RuleDef {
    pub fn new(spec: RuleSpec) -> Self {
        Self { name: None, spec }
    }

    pub fn named(name: impl Into<String>, spec: RuleSpec) -> Self {
        Self {
            name: Some(name.into()),
            spec,
        }
    }

    /// Definitions of the four MIU rules over `alphabet`.
    pub fn miu(alphabet: &Alphabet) -> Vec<RuleDef> {
        let Alphabet { m, i, u } = *alphabet;
        vec![
            RuleDef::named(
                "rule_0",
                RuleSpec::AppendIfEndsWith {
                    suffix: i.to_string(),
                    append: u.to_string(),
                },
            ),
            RuleDef::named("rule_1", RuleSpec::DuplicateAfterPrefix { prefix: m.to_string() }),
            RuleDef::named(
                "rule_2",
                RuleSpec::ReplaceFirst {
                    pattern: [i; 3].iter().collect(),
                    replacement: u.to_string(),
                },
            ),
            RuleDef::named(
                "rule_3",
                RuleSpec::ReplaceFirst {
                    pattern: [u; 2].iter().collect(),
                    replacement: String::new(),
                },
            ),
        ]
    }
}
