//! Core types for the showfmt formatting engine.
//!
//! This crate holds the data model shared by the registry, the built-in
//! modules, and the renderer:
//!
//! - [`View`] - borrowed byte window used for templates and names
//! - [`WidthClass`] - how an argument is carried and dispatched
//! - [`ShowValue`] - tagged rendering argument
//! - [`ShowFn`] / [`ShowCallable`] - type-erased show functions
//! - [`Descriptor`] - a registry entry
//! - the error hierarchy rooted at [`ShowfmtError`]

pub mod descriptor;
pub mod error;
pub mod show_fn;
pub mod value;
pub mod view;
pub mod width_class;

pub use descriptor::Descriptor;
pub use error::{RegistrationError, RenderError, ShowError, ShowfmtError, ViewError};
pub use show_fn::{ShowCallable, ShowFn};
pub use value::ShowValue;
pub use view::View;
pub use width_class::WidthClass;
