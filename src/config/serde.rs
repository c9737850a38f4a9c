use super::{DocumentConfig, UncheckedNamePolicy, error::ConfigError};
use crate::element_name::NameGrammar;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A serializable configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    extend: Option<PathBuf>,
    grammar: Option<NameGrammar>,
    max_name_length: Option<usize>,
    unchecked: Option<UncheckedConfig>,
}

impl SerializableConfig {
    /// Returns a configuration file path to extend from.
    pub fn extend(&self) -> Option<&Path> {
        self.extend.as_deref()
    }

    /// Merges another configuration that extends this one.
    ///
    /// The `extend` field of this configuration is kept so that the chain can
    /// be followed further.
    pub fn merge(&mut self, other: Self) {
        if other.grammar.is_some() {
            self.grammar = other.grammar;
        }

        if other.max_name_length.is_some() {
            self.max_name_length = other.max_name_length;
        }

        if let Some(other) = other.unchecked {
            if let Some(unchecked) = &mut self.unchecked {
                unchecked.merge(other);
            } else {
                self.unchecked = Some(other);
            }
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UncheckedConfig {
    policy: Option<UncheckedPolicyKind>,
    fallback: Option<String>,
}

impl UncheckedConfig {
    fn merge(&mut self, other: Self) {
        if other.policy.is_some() {
            self.policy = other.policy;
        }

        if other.fallback.is_some() {
            self.fallback = other.fallback;
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum UncheckedPolicyKind {
    Preserve,
    Substitute,
}

/// Compiles a configuration.
pub fn compile_config(config: SerializableConfig) -> Result<DocumentConfig, ConfigError> {
    let document = DocumentConfig::new()
        .set_grammar(config.grammar.unwrap_or_default())
        .set_max_name_length(config.max_name_length);
    let unchecked = config.unchecked.unwrap_or_default();

    let policy = match unchecked.policy {
        None | Some(UncheckedPolicyKind::Preserve) => UncheckedNamePolicy::Preserve,
        Some(UncheckedPolicyKind::Substitute) => UncheckedNamePolicy::Substitute(
            document
                .validate(
                    unchecked
                        .fallback
                        .as_deref()
                        .ok_or(ConfigError::MissingFallback)?,
                )
                .map_err(ConfigError::InvalidFallback)?,
        ),
    };

    Ok(document.set_unchecked_name_policy(policy))
}
