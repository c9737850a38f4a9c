use crate::{
    element_name::ElementName,
    identity::{DocumentId, ElementId},
};
use core::hash::{Hash, Hasher};
use serde::Serialize;

/// An element.
///
/// Elements are only created by [`Document`](crate::Document). Equality and
/// hashing are by identity, so two elements with the same name are still
/// different elements.
#[derive(Debug, Serialize)]
pub struct Element {
    id: ElementId,
    name: ElementName,
    owner: DocumentId,
    value: bool,
}

impl Element {
    pub(crate) fn new(name: ElementName, owner: DocumentId, value: bool) -> Self {
        Self {
            id: ElementId::next(),
            name,
            owner,
            value,
        }
    }

    /// Returns a name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns a name as a value.
    pub const fn element_name(&self) -> &ElementName {
        &self.name
    }

    /// Returns an identity.
    pub const fn identity(&self) -> ElementId {
        self.id
    }

    /// Returns a tag name.
    ///
    /// It is the name upper-cased in ASCII the way HTML documents report tag
    /// names.
    pub fn tag_name(&self) -> String {
        self.name.to_ascii_uppercase()
    }

    /// Returns an identity of the document that created the element.
    pub const fn owner(&self) -> DocumentId {
        self.owner
    }

    /// Returns a value given on creation.
    ///
    /// It is always `false` for elements created by
    /// [`Document::create_element`](crate::Document::create_element).
    pub const fn value(&self) -> bool {
        self.value
    }

    /// Returns `true` if two elements are the same element.
    pub fn is_same_node(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Returns `true` if two elements have the same name.
    pub fn is_equal_node(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_node(other)
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
