use core::{
    fmt::{self, Display, Formatter},
    sync::atomic::{AtomicU64, Ordering},
};
use serde::Serialize;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// An element identity.
///
/// Identities are drawn from a process-wide counter and never reused, so they
/// are distinct across documents and threads.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns a raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ElementId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// A document identity.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DocumentId(u64);

impl DocumentId {
    pub(crate) fn next() -> Self {
        Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns a raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "document#{}", self.0)
    }
}
