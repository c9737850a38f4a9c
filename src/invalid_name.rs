use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use serde::Serialize;

/// An invalid element name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InvalidName {
    name: String,
    reason: InvalidNameReason,
}

impl InvalidName {
    /// Creates an invalid name error.
    pub const fn new(name: String, reason: InvalidNameReason) -> Self {
        Self { name, reason }
    }

    /// Returns a rejected name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reason of the rejection.
    pub const fn reason(&self) -> &InvalidNameReason {
        &self.reason
    }
}

impl Error for InvalidName {}

impl Display for InvalidName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "invalid element name {:?}: {}", self.name, self.reason)
    }
}

/// A reason why an element name is invalid.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum InvalidNameReason {
    /// An empty name.
    Empty,
    /// A character not allowed at its position.
    InvalidCharacter {
        /// A character.
        character: char,
        /// A character index in a name.
        position: usize,
    },
    /// A name longer than a limit.
    TooLong {
        /// A length in characters.
        length: usize,
        /// A maximum length in characters.
        max: usize,
    },
}

impl Display for InvalidNameReason {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "empty name"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                formatter,
                "invalid character {character:?} at position {position}"
            ),
            Self::TooLong { length, max } => {
                write!(formatter, "name too long ({length} > {max})")
            }
        }
    }
}
