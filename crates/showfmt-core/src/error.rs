//! Unified error types for showfmt.
//!
//! Each phase of formatting has its own error type:
//!
//! ```text
//! ShowfmtError (top-level wrapper)
//! ├── ViewError         - Out-of-bounds view slicing
//! ├── RegistrationError - Descriptor registration errors
//! ├── ShowError         - Errors raised by a single show function
//! └── RenderError       - Argument checking and output errors while rendering
//! ```
//!
//! Unknown placeholder names and unterminated braces are not errors: the
//! renderer writes the `{` through as a literal and keeps scanning.

use std::io;

use thiserror::Error;

use crate::WidthClass;

// ============================================================================
// View Errors
// ============================================================================

/// Errors from slicing a [`View`](crate::View).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The requested range does not fit inside the view.
    #[error("range {start}..{start}+{len} out of bounds for view of length {available}")]
    OutOfBounds {
        /// Requested start, relative to the view.
        start: usize,
        /// Requested length.
        len: usize,
        /// Length of the view being sliced.
        available: usize,
    },
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur while registering descriptors.
///
/// These are programmer errors in the setup phase; callers are expected to
/// surface them immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A raw width code other than 0, 4, or 8.
    #[error("invalid width class code {0} (expected 0, 4, or 8)")]
    InvalidWidthClass(u8),

    /// The registry reached its capacity bound.
    #[error("registry is full: capacity of {capacity} descriptors reached")]
    CapacityExceeded {
        /// The configured capacity.
        capacity: usize,
    },

    /// An inline width class was registered without a show function.
    #[error("type '{name}': {width} descriptors require a show function")]
    MissingShowFn {
        /// The type name being registered.
        name: String,
        /// The width class that was requested.
        width: WidthClass,
    },

    /// A float descriptor was registered with a show function.
    #[error("type '{name}': float descriptors are formatted inline and take no show function")]
    UnexpectedShowFn {
        /// The type name being registered.
        name: String,
    },

    /// The type name was empty.
    #[error("type name must not be empty")]
    EmptyName,
}

// ============================================================================
// Show Errors
// ============================================================================

/// Errors raised by a show function.
#[derive(Debug, Error)]
pub enum ShowError {
    /// Writing to the sink failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    /// The show function was handed a value of the wrong kind.
    #[error("expected {expected} value, found {found}")]
    ValueMismatch {
        /// The kind the show function handles.
        expected: &'static str,
        /// The kind it received.
        found: &'static str,
    },
}

impl ShowError {
    /// Build a [`ShowError::ValueMismatch`].
    pub fn mismatch(expected: &'static str, found: &'static str) -> Self {
        ShowError::ValueMismatch { expected, found }
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while rendering a template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the sink failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    /// A placeholder had no argument left to consume.
    #[error("placeholder '{{{placeholder}}}' (argument {index}) has no matching argument")]
    MissingArgument {
        /// The placeholder name.
        placeholder: String,
        /// Zero-based argument position the placeholder would consume.
        index: usize,
    },

    /// An argument's width class does not match its placeholder's descriptor.
    #[error(
        "placeholder '{{{placeholder}}}' expects a {expected} argument, but argument {index} is {found}"
    )]
    WidthMismatch {
        /// The placeholder name.
        placeholder: String,
        /// Zero-based argument position.
        index: usize,
        /// The descriptor's width class.
        expected: WidthClass,
        /// The width class of the supplied argument.
        found: WidthClass,
    },

    /// More arguments were supplied than the template consumes.
    #[error("template consumes {consumed} arguments but {supplied} were supplied")]
    UnusedArguments {
        /// Arguments consumed by placeholders.
        consumed: usize,
        /// Arguments supplied by the caller.
        supplied: usize,
    },

    /// A show function failed.
    #[error("placeholder '{{{placeholder}}}': {source}")]
    Show {
        /// The placeholder name.
        placeholder: String,
        /// The underlying show error.
        source: ShowError,
    },

    /// String output was requested but the rendered bytes are not UTF-8.
    #[error("rendered output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl RenderError {
    /// Whether this error was caused by the argument list rather than I/O.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            RenderError::MissingArgument { .. }
                | RenderError::WidthMismatch { .. }
                | RenderError::UnusedArguments { .. }
                | RenderError::Show {
                    source: ShowError::ValueMismatch { .. },
                    ..
                }
        )
    }
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Top-level error type wrapping all showfmt errors.
#[derive(Debug, Error)]
pub enum ShowfmtError {
    /// A view error.
    #[error(transparent)]
    View(#[from] ViewError),

    /// A registration error.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// A show function error.
    #[error(transparent)]
    Show(#[from] ShowError),

    /// A rendering error.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ShowfmtError {
    /// Check if this is a view error.
    pub fn is_view(&self) -> bool {
        matches!(self, ShowfmtError::View(_))
    }

    /// Check if this is a registration error.
    pub fn is_registration(&self) -> bool {
        matches!(self, ShowfmtError::Registration(_))
    }

    /// Check if this is a show function error.
    pub fn is_show(&self) -> bool {
        matches!(self, ShowfmtError::Show(_))
    }

    /// Check if this is a rendering error.
    pub fn is_render(&self) -> bool {
        matches!(self, ShowfmtError::Render(_))
    }
}
