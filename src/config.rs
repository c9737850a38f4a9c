mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
    toml::read_config,
};
use crate::element_name::{ElementName, NameGrammar};

/// A document configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DocumentConfig {
    grammar: NameGrammar,
    max_name_length: Option<usize>,
    unchecked_name_policy: UncheckedNamePolicy,
}

impl DocumentConfig {
    /// Creates a document configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a name grammar.
    pub const fn grammar(&self) -> NameGrammar {
        self.grammar
    }

    /// Returns a maximum name length in characters.
    pub const fn max_name_length(&self) -> Option<usize> {
        self.max_name_length
    }

    /// Returns a policy for malformed names given to infallible creation.
    pub const fn unchecked_name_policy(&self) -> &UncheckedNamePolicy {
        &self.unchecked_name_policy
    }

    /// Sets a name grammar.
    pub const fn set_grammar(mut self, grammar: NameGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Sets a maximum name length in characters.
    pub const fn set_max_name_length(mut self, length: Option<usize>) -> Self {
        self.max_name_length = length;
        self
    }

    /// Sets a policy for malformed names given to infallible creation.
    ///
    /// A fallback name of a substitute policy is checked against the grammar
    /// and maximum length when a document is created with this configuration.
    pub fn set_unchecked_name_policy(mut self, policy: UncheckedNamePolicy) -> Self {
        self.unchecked_name_policy = policy;
        self
    }

    /// Validates a name.
    pub fn validate(&self, name: &str) -> Result<ElementName, crate::InvalidName> {
        ElementName::new(name, self.grammar, self.max_name_length)
    }
}

/// A policy for malformed names given to infallible creation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum UncheckedNamePolicy {
    /// Keeps a name as it is. Callers are responsible for validation.
    #[default]
    Preserve,
    /// Replaces a name with a fallback name.
    Substitute(ElementName),
}
