use crate::{
    Metrics,
    config::{ConfigError, DocumentConfig, UncheckedNamePolicy},
    element::Element,
    element_name::ElementName,
    identity::{DocumentId, ElementId},
    invalid_name::InvalidName,
};
use core::{
    fmt::{self, Debug, Formatter},
    sync::atomic::{AtomicUsize, Ordering},
};
use log::{debug, trace, warn};
use scc::HashSet;

const ANCHOR_ELEMENT_NAME: &str = "a";
const INITIAL_REGISTRY_CAPACITY: usize = 1 << 6;

/// A document.
///
/// A document mints elements. It can be shared across threads, and every
/// element it creates has an identity distinct from any other element in the
/// process.
pub struct Document {
    id: DocumentId,
    config: DocumentConfig,
    elements: HashSet<ElementId>,
    rejected: AtomicUsize,
    unchecked: AtomicUsize,
}

impl Document {
    /// Creates a document with a default configuration.
    pub fn new() -> Self {
        Self::build(DocumentConfig::default())
    }

    /// Creates a document.
    ///
    /// It fails if a fallback name of a substitute policy is not allowed by
    /// the grammar and maximum length of the configuration.
    pub fn with_config(config: DocumentConfig) -> Result<Self, ConfigError> {
        if let UncheckedNamePolicy::Substitute(fallback) = config.unchecked_name_policy() {
            config
                .validate(fallback)
                .map_err(ConfigError::InvalidFallback)?;
        }

        Ok(Self::build(config))
    }

    fn build(config: DocumentConfig) -> Self {
        let id = DocumentId::next();

        debug!("created {id} with {config:?}");

        Self {
            id,
            config,
            elements: HashSet::with_capacity(INITIAL_REGISTRY_CAPACITY),
            rejected: Default::default(),
            unchecked: Default::default(),
        }
    }

    /// Returns an identity.
    pub const fn id(&self) -> DocumentId {
        self.id
    }

    /// Returns a configuration.
    pub const fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Creates an element.
    ///
    /// It fails if a name is empty or not allowed by the configured grammar
    /// and maximum length.
    pub fn create_element(&self, name: &str) -> Result<Element, InvalidName> {
        match self.config.validate(name) {
            Ok(name) => Ok(self.mint(name, false)),
            Err(error) => {
                debug!("{}: {error}", self.id);
                self.rejected.fetch_add(1, Ordering::Relaxed);
                Err(error)
            }
        }
    }

    /// Creates an element with a value.
    ///
    /// This never fails. The value is stored on the element as it is. Names
    /// that fail validation are handled by the configured
    /// [`UncheckedNamePolicy`].
    pub fn create_element_with_value(&self, name: &str, value: bool) -> Element {
        let name = match self.config.validate(name) {
            Ok(name) => name,
            Err(error) => {
                self.unchecked.fetch_add(1, Ordering::Relaxed);

                match self.config.unchecked_name_policy() {
                    UncheckedNamePolicy::Preserve => {
                        warn!("{}: keeping unchecked name: {error}", self.id);
                        ElementName::unchecked(name)
                    }
                    UncheckedNamePolicy::Substitute(fallback) => {
                        warn!("{}: substituting {fallback:?}: {error}", self.id);
                        fallback.clone()
                    }
                }
            }
        };

        self.mint(name, value)
    }

    /// Creates an anchor element.
    pub fn create_anchor_element(&self) -> Element {
        self.mint(ElementName::unchecked(ANCHOR_ELEMENT_NAME), false)
    }

    /// Returns `true` if the document created an element.
    pub fn contains(&self, element: &Element) -> bool {
        element.owner() == self.id && self.elements.contains_sync(&element.identity())
    }

    /// Returns a number of created elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns a number of names that failed validation on infallible
    /// creation.
    pub fn unchecked_count(&self) -> usize {
        self.unchecked.load(Ordering::Relaxed)
    }

    /// Returns metrics of created and rejected elements.
    pub fn metrics(&self) -> Metrics {
        Metrics::new(self.element_count(), self.rejected.load(Ordering::Relaxed))
    }

    fn mint(&self, name: ElementName, value: bool) -> Element {
        let element = Element::new(name, self.id, value);

        let inserted = self.elements.insert_sync(element.identity()).is_ok();
        debug_assert!(inserted, "identity reused: {}", element.identity());

        trace!("{}: created {} {}", self.id, element.name(), element.identity());

        element
    }
}

impl Debug for Document {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Document")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("elements", &self.element_count())
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
