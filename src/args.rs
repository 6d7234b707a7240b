//! Checked argument consumption.
//!
//! [`ArgStream`] hands out rendering arguments left to right, one per
//! resolved placeholder, and refuses any argument whose width class differs
//! from the placeholder's descriptor. This replaces reading raw words off a
//! variadic stream.

use showfmt_core::{RenderError, ShowValue, View, WidthClass};

/// Cursor over a caller-supplied argument list.
#[derive(Debug)]
pub struct ArgStream<'s, 'a> {
    args: &'s [ShowValue<'a>],
    next: usize,
}

impl<'s, 'a> ArgStream<'s, 'a> {
    /// Start at the first argument.
    pub fn new(args: &'s [ShowValue<'a>]) -> Self {
        Self { args, next: 0 }
    }

    /// Take the next argument for `placeholder`, which expects `width`.
    ///
    /// # Errors
    ///
    /// - [`RenderError::MissingArgument`] if the list is exhausted
    /// - [`RenderError::WidthMismatch`] if the next argument has another width
    ///   class; the cursor does not advance
    pub fn pull(
        &mut self,
        placeholder: &View<'_>,
        width: WidthClass,
    ) -> Result<&'s ShowValue<'a>, RenderError> {
        let index = self.next;
        let value = self
            .args
            .get(index)
            .ok_or_else(|| RenderError::MissingArgument {
                placeholder: placeholder.to_string(),
                index,
            })?;

        let found = value.width_class();
        if found != width {
            return Err(RenderError::WidthMismatch {
                placeholder: placeholder.to_string(),
                index,
                expected: width,
                found,
            });
        }

        self.next += 1;
        Ok(value)
    }

    /// Number of arguments consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }

    /// Number of arguments supplied.
    pub fn supplied(&self) -> usize {
        self.args.len()
    }

    /// Number of arguments not yet consumed.
    pub fn remaining(&self) -> usize {
        self.supplied() - self.next
    }

    /// Finish consumption.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnusedArguments`] if `reject_unused` is set and
    /// arguments are left over.
    pub fn finish(self, reject_unused: bool) -> Result<(), RenderError> {
        if reject_unused && self.remaining() > 0 {
            return Err(RenderError::UnusedArguments {
                consumed: self.next,
                supplied: self.supplied(),
            });
        }
        Ok(())
    }
}
