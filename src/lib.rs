//! Runtime `{name}` placeholder formatting.
//!
//! Templates are plain byte strings. A `{name}` span is replaced by the
//! output of the show function registered for `name`, applied to the next
//! argument. Anything else, including unknown names and unterminated braces,
//! is copied through unchanged.
//!
//! # Quick Start
//!
//! ```
//! use showfmt::{Context, args};
//!
//! let mut ctx = Context::with_default_modules().unwrap();
//! ctx.seal().unwrap();
//!
//! let mut out = Vec::new();
//! ctx.render(&mut out, "{int} is {bool}, {unknown} stays", &args![7i32, true])
//!     .unwrap();
//! assert_eq!(out, b"7 is true, {unknown} stays");
//! ```
//!
//! # Architecture
//!
//! - [`showfmt_core`]: [`View`], [`ShowValue`], [`ShowFn`], [`Descriptor`] and errors
//! - [`showfmt_registry`]: the [`ShowRegistry`] and [`Module`] batches
//! - [`showfmt_modules`]: built-in show functions and float formatting
//! - this crate: scanning, argument checking, rendering and [`Context`]

mod args;
mod config;
mod context;
mod render;
mod scan;

pub use args::ArgStream;
pub use config::{FloatStyle, RenderConfig};
pub use context::{Context, ContextError};
pub use render::Renderer;
pub use scan::{Placeholder, Segment, Segments};

pub use showfmt_core::{
    Descriptor, RegistrationError, RenderError, ShowCallable, ShowError, ShowFn, ShowValue,
    ShowfmtError, View, ViewError, WidthClass,
};
pub use showfmt_modules::{DEFAULT_MODULE_NAME, default_module, format_float};
pub use showfmt_registry::{DEFAULT_CAPACITY, Module, ShowRegistry};

/// Build an argument array, converting each expression with
/// [`ShowValue::from`].
///
/// ```
/// use showfmt::{ShowValue, args};
///
/// let list = args![1i32, 'x', c"text", 2.5];
/// assert_eq!(list[1], ShowValue::Char('x'));
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::ShowValue::from($value)),*]
    };
}
