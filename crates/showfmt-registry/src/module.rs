//! Batches of pending registrations.
//!
//! A [`Module`] collects show descriptors so a set of related types can be
//! built once and installed into a registry in a single call. Validation
//! happens at install time, in the order entries were added.

use showfmt_core::{ShowCallable, ShowFn, WidthClass};

/// An ordered batch of descriptors waiting to be registered.
#[derive(Debug, Default)]
pub struct Module {
    name: String,
    entries: Vec<(String, Option<ShowFn>, WidthClass)>,
}

impl Module {
    /// Create an empty module. The name is only used for diagnostics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add an inline type rendered by `show`.
    pub fn show<F>(mut self, name: impl Into<String>, width: WidthClass, show: F) -> Self
    where
        F: ShowCallable + Send + Sync + 'static,
    {
        self.entries.push((name.into(), Some(ShowFn::new(show)), width));
        self
    }

    /// Add an inline type with an already-wrapped show function.
    pub fn show_fn(mut self, name: impl Into<String>, width: WidthClass, show: ShowFn) -> Self {
        self.entries.push((name.into(), Some(show), width));
        self
    }

    /// Add a float type, formatted inline by the renderer.
    pub fn float(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), None, WidthClass::FloatSpecial));
        self
    }

    /// The module's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the module has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pending type names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _, _)| name.as_str())
    }

    pub(crate) fn into_entries(
        self,
    ) -> impl Iterator<Item = (String, Option<ShowFn>, WidthClass)> {
        self.entries.into_iter()
    }
}
