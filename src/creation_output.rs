use crate::{element::Element, invalid_name::InvalidName};

/// A result of element creation for a requested name.
#[derive(Debug)]
pub struct CreationOutput {
    name: String,
    result: Result<Element, InvalidName>,
}

impl CreationOutput {
    /// Creates a creation output.
    pub const fn new(name: String, result: Result<Element, InvalidName>) -> Self {
        Self { name, result }
    }

    /// Returns a requested name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a creation result.
    pub const fn result(&self) -> &Result<Element, InvalidName> {
        &self.result
    }
}
