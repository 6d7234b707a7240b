//! ShowRegistry - type name to descriptor mapping.
//!
//! This module provides [`ShowRegistry`], the store that the renderer consults
//! for every placeholder. Entries are kept in insertion order and never
//! removed.
//!
//! # Lookup Semantics
//!
//! Lookup returns the FIRST descriptor registered under a name. Registering a
//! name twice is allowed; the later entry is stored but can never be reached.
//! A companion index from name bytes to the first entry makes lookups O(1);
//! [`ShowRegistry::lookup_linear`] performs the plain first-match scan and
//! always agrees with it.
//!
//! # Thread Safety
//!
//! Registration takes `&mut self`, so it is serialized by the borrow checker.
//! Once populated, the registry is only read; the renderer shares it behind
//! an `Arc` and concurrent lookups are safe.
//!
//! # Example
//!
//! ```
//! use showfmt_core::{ShowError, ShowFn, ShowValue, View, WidthClass};
//! use showfmt_registry::ShowRegistry;
//!
//! let mut registry = ShowRegistry::new();
//! let show = ShowFn::new(
//!     |out: &mut dyn std::io::Write, value: &ShowValue<'_>| -> Result<(), ShowError> {
//!         write!(out, "{:?}", value)?;
//!         Ok(())
//!     },
//! );
//! registry.register("int", Some(show), WidthClass::Inline4).unwrap();
//! registry.register("float", None, WidthClass::FloatSpecial).unwrap();
//!
//! let desc = registry.lookup(&View::from("int")).unwrap();
//! assert_eq!(desc.width(), WidthClass::Inline4);
//! assert!(registry.lookup(&View::from("double")).is_none());
//! ```

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use showfmt_core::{Descriptor, RegistrationError, ShowFn, View, WidthClass};

use crate::Module;

/// Default number of descriptors a registry accepts.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Ordered store of type descriptors.
#[derive(Debug)]
pub struct ShowRegistry {
    /// Descriptors in registration order (PRIMARY storage).
    entries: Vec<Descriptor>,

    /// Name bytes -> index of the first descriptor with that name.
    first_by_name: FxHashMap<Box<[u8]>, usize>,

    /// Maximum number of descriptors; `None` for unbounded.
    capacity: Option<usize>,

    /// Length in bytes of the longest registered name.
    longest_name: usize,
}

impl ShowRegistry {
    /// Create an empty registry with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity_limit(Some(DEFAULT_CAPACITY))
    }

    /// Create an empty registry with an explicit capacity bound.
    ///
    /// `None` removes the bound.
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            first_by_name: FxHashMap::default(),
            capacity,
            longest_name: 0,
        }
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a descriptor.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::EmptyName`] if `name` is empty
    /// - [`RegistrationError::MissingShowFn`] if `width` is inline and `show` is `None`
    /// - [`RegistrationError::UnexpectedShowFn`] if `width` is
    ///   [`WidthClass::FloatSpecial`] and `show` is `Some`
    /// - [`RegistrationError::CapacityExceeded`] if the registry is full
    pub fn register(
        &mut self,
        name: impl Into<String>,
        show: Option<ShowFn>,
        width: WidthClass,
    ) -> Result<(), RegistrationError> {
        let descriptor = Descriptor::new(name, show, width)?;
        self.push(descriptor)
    }

    /// Register a descriptor whose width class is given as a raw code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidWidthClass`] if `code` is not 0, 4,
    /// or 8, plus everything [`register`](Self::register) can return.
    pub fn register_raw(
        &mut self,
        name: impl Into<String>,
        show: Option<ShowFn>,
        code: u8,
    ) -> Result<(), RegistrationError> {
        let width = WidthClass::try_from(code)
            .map_err(|err| RegistrationError::InvalidWidthClass(err.number))?;
        self.register(name, show, width)
    }

    /// Register every pending entry of a module, in order.
    ///
    /// Stops at the first failing entry; entries before it stay registered.
    pub fn install(&mut self, module: Module) -> Result<(), RegistrationError> {
        debug!(
            module = module.name(),
            entries = module.len(),
            "installing show module"
        );
        for (name, show, width) in module.into_entries() {
            self.register(name, show, width)?;
        }
        Ok(())
    }

    fn push(&mut self, descriptor: Descriptor) -> Result<(), RegistrationError> {
        if let Some(capacity) = self.capacity
            && self.entries.len() >= capacity
        {
            return Err(RegistrationError::CapacityExceeded { capacity });
        }

        let index = self.entries.len();
        let key: Box<[u8]> = descriptor.name().as_bytes().into();
        if let Some(&first) = self.first_by_name.get(&key) {
            warn!(
                name = descriptor.name(),
                first_index = first,
                "duplicate type name registered; the first registration stays in effect"
            );
        } else {
            self.longest_name = self.longest_name.max(key.len());
            self.first_by_name.insert(key, index);
        }

        debug!(
            name = descriptor.name(),
            width = %descriptor.width(),
            index,
            "registered show descriptor"
        );
        self.entries.push(descriptor);
        Ok(())
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Find the first descriptor registered under `name`.
    ///
    /// Names longer than every registered name are rejected without hashing.
    pub fn lookup(&self, name: &View<'_>) -> Option<&Descriptor> {
        if name.len() > self.longest_name {
            return None;
        }
        self.first_by_name
            .get(name.as_bytes())
            .map(|&index| &self.entries[index])
    }

    /// Find the first descriptor registered under `name` by scanning every entry.
    ///
    /// Equivalent to [`lookup`](Self::lookup), in O(registry size).
    pub fn lookup_linear(&self, name: &View<'_>) -> Option<&Descriptor> {
        self.entries
            .iter()
            .find(|desc| View::from(desc.name()) == *name)
    }

    /// Find the first descriptor registered under a string name.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.lookup(&View::from(name))
    }

    /// Whether a descriptor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    // ==========================================================================
    // Inspection
    // ==========================================================================

    /// Number of registered descriptors, including shadowed duplicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in bytes of the longest registered name.
    pub fn longest_name(&self) -> usize {
        self.longest_name
    }

    /// The capacity bound, if any.
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity
    }

    /// Iterate over descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.entries.iter()
    }
}

impl Default for ShowRegistry {
    fn default() -> Self {
        Self::new()
    }
}
