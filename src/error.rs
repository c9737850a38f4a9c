use crate::config::ConfigError;
use core::{
    error,
    fmt::{self, Display, Formatter},
};
use std::io;

/// An error.
#[derive(Debug)]
pub enum Error {
    /// A configuration error.
    Config(ConfigError),
    /// Element names rejected on creation.
    Creation(usize),
    /// An I/O error.
    Io(io::Error),
    /// A JSON serialization error.
    Json(serde_json::Error),
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(formatter, "{error}"),
            Self::Creation(count) => write!(formatter, "{count} element name(s) rejected"),
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Json(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
