//! Show function storage.
//!
//! A show function renders one argument to an output sink. Functions of any
//! concrete type are stored uniformly behind [`ShowFn`], which is what the
//! registry keeps in each descriptor.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::{ShowError, ShowValue};

/// Trait for callable show functions.
///
/// Implementors write the textual form of `value` to `out`. They should
/// return [`ShowError::ValueMismatch`] when handed a value kind they do not
/// render, and propagate sink failures as [`ShowError::Io`].
pub trait ShowCallable {
    /// Render `value` to `out`.
    fn show(&self, out: &mut dyn io::Write, value: &ShowValue<'_>) -> Result<(), ShowError>;
}

impl<F> ShowCallable for F
where
    F: Fn(&mut dyn io::Write, &ShowValue<'_>) -> Result<(), ShowError>,
{
    fn show(&self, out: &mut dyn io::Write, value: &ShowValue<'_>) -> Result<(), ShowError> {
        (self)(out, value)
    }
}

/// Type-erased show function.
///
/// The inner callable is wrapped in `Arc` so descriptors can be cloned and a
/// sealed registry can be shared across threads.
pub struct ShowFn {
    inner: Arc<dyn ShowCallable + Send + Sync>,
}

impl ShowFn {
    /// Create a new `ShowFn` from a callable.
    pub fn new<F>(f: F) -> Self
    where
        F: ShowCallable + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Call this show function.
    pub fn call(&self, out: &mut dyn io::Write, value: &ShowValue<'_>) -> Result<(), ShowError> {
        self.inner.show(out, value)
    }
}

impl Clone for ShowFn {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for ShowFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowFn").finish_non_exhaustive()
    }
}
