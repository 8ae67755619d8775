//! Search configuration.
//!
//! A configuration names the axiom, the depth bound and the ordered rules.
//! It can be read from TOML; every field is optional and falls back to the
//! MIU system starting at `MI`, four levels deep.
//!
//! ```toml
//! axiom = "MI"
//! max_level = 4
//!
//! [[rules]]
//! name = "append_u"
//! kind = "append_if_ends_with"
//! suffix = "I"
//! append = "U"
//! ```
//!
//! When `rules` is absent the four MIU rules are instantiated over `alphabet`
//! (default `M`, `I`, `U`).

use crate::rules::{Alphabet, RuleDef, RuleSet};
use crate::search::{search_checked, SearchError};
use crate::tree::TheoremTree;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_AXIOM: &str = "MI";
pub const DEFAULT_MAX_LEVEL: i64 = 4;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn default_axiom() -> String {
    DEFAULT_AXIOM.to_string()
}

fn default_max_level() -> i64 {
    DEFAULT_MAX_LEVEL
}

/// `{axiom, max_level, rules}` as supplied by a caller.
///
/// `max_level` stays signed here; it is checked when the search starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default = "default_axiom")]
    pub axiom: String,
    #[serde(default = "default_max_level")]
    pub max_level: i64,
    #[serde(default)]
    pub alphabet: Alphabet,
    /// Rules in application order. `None` selects the MIU rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleDef>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            axiom: default_axiom(),
            max_level: DEFAULT_MAX_LEVEL,
            alphabet: Alphabet::default(),
            rules: None,
        }
    }
}

impl SearchConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), axiom = %config.axiom, max_level = config.max_level, "loaded config");
        Ok(config)
    }

    /// Compiles the configured rules.
    pub fn rule_set(&self) -> RuleSet {
        match &self.rules {
            Some(defs) => RuleSet::from_defs(defs),
            None => RuleSet::miu(&self.alphabet),
        }
    }

    /// Runs the configured search.
    pub fn search(&self) -> Result<TheoremTree, SearchError> {
        search_checked(&self.axiom, &self.rule_set(), self.max_level)
    }
}
