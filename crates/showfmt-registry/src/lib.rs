//! showfmt Registry crate.
//!
//! Holds [`ShowRegistry`], the name-to-descriptor store consulted by the
//! renderer, and [`Module`], a batch of registrations installed together.

pub mod module;
pub mod registry;

pub use module::Module;
pub use registry::{DEFAULT_CAPACITY, ShowRegistry};

// Re-export the core types registry users always need.
pub use showfmt_core::{Descriptor, RegistrationError, ShowFn, View, WidthClass};
