mod grammar;

pub use self::grammar::NameGrammar;
use crate::invalid_name::{InvalidName, InvalidNameReason};
use alloc::sync::Arc;
use core::{
    fmt::{self, Display, Formatter},
    ops::Deref,
};
use serde::Serialize;

/// An element name.
///
/// A value of this type is only built through validation, except for names
/// accepted by [`Document::create_element_with_value`](crate::Document::create_element_with_value)
/// under the preserving policy.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ElementName(Arc<str>);

impl ElementName {
    /// Validates a name against a grammar and an optional maximum length in
    /// characters.
    pub fn new(
        name: &str,
        grammar: NameGrammar,
        max_length: Option<usize>,
    ) -> Result<Self, InvalidName> {
        Self::validate(name, grammar, max_length)
            .map(|()| Self(name.into()))
            .map_err(|reason| InvalidName::new(name.into(), reason))
    }

    /// Validates a name with the default grammar.
    pub fn parse(name: &str) -> Result<Self, InvalidName> {
        Self::new(name, NameGrammar::default(), None)
    }

    pub(crate) fn unchecked(name: &str) -> Self {
        Self(name.into())
    }

    /// Returns a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(
        name: &str,
        grammar: NameGrammar,
        max_length: Option<usize>,
    ) -> Result<(), InvalidNameReason> {
        if name.is_empty() {
            return Err(InvalidNameReason::Empty);
        }

        if let Some(max) = max_length {
            let length = name.chars().count();

            if length > max {
                return Err(InvalidNameReason::TooLong { length, max });
            }
        }

        if let Some((position, character)) = grammar.find_invalid_character(name) {
            return Err(InvalidNameReason::InvalidCharacter {
                character,
                position,
            });
        }

        Ok(())
    }
}

impl Deref for ElementName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ElementName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ElementName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl TryFrom<&str> for ElementName {
    type Error = InvalidName;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::parse(name)
    }
}
