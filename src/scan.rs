//! Template scanning.
//!
//! [`Segments`] splits a template into literal runs and resolved
//! placeholders. Both the standalone argument check and the renderer walk the
//! same iterator, so they always agree on which spans are placeholders.
//!
//! Scanning rules, with `i` an absolute index into the template:
//!
//! 1. A byte other than `{` is literal.
//! 2. At `{`, search for `}` from `i + 1`. If there is none, the `{` is literal.
//! 3. Otherwise the name is the bytes between the braces. If the registry has
//!    no descriptor for it, the `{` alone is literal and scanning resumes at
//!    `i + 1`, so the name and `}` are rescanned as ordinary text.
//! 4. A resolved placeholder consumes `i ..= close`; scanning resumes after
//!    the closing brace.
//!
//! The position of the next `}` is cached and only searched again once the
//! scan has moved past it, so a template is scanned in linear time however
//! many `{` bytes it holds.

use std::ops::Range;

use showfmt_core::{Descriptor, View};
use showfmt_registry::ShowRegistry;
use tracing::trace;

/// A `{name}` span that resolved to a registered descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Placeholder<'t, 'r> {
    /// The name between the braces.
    pub name: View<'t>,
    /// Absolute index of the opening `{`.
    pub open: usize,
    /// Absolute index of the closing `}`.
    pub close: usize,
    /// The descriptor the name resolved to.
    pub descriptor: &'r Descriptor,
}

impl Placeholder<'_, '_> {
    /// The byte range covered, braces included.
    pub fn span(&self) -> Range<usize> {
        self.open..self.close + 1
    }
}

/// A piece of a scanned template.
#[derive(Debug, Clone, Copy)]
pub enum Segment<'t, 'r> {
    /// Bytes to copy verbatim.
    Literal(&'t [u8]),
    /// A resolved placeholder.
    Placeholder(Placeholder<'t, 'r>),
}

impl<'t, 'r> Segment<'t, 'r> {
    /// The placeholder, if this segment is one.
    pub fn into_placeholder(self) -> Option<Placeholder<'t, 'r>> {
        match self {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        }
    }
}

/// Iterator over the segments of a template.
///
/// Consecutive literal bytes, including `{` bytes that did not resolve, are
/// merged into a single [`Segment::Literal`].
#[derive(Debug)]
pub struct Segments<'t, 'r> {
    template: View<'t>,
    registry: &'r ShowRegistry,
    pos: usize,
    pending: Option<Placeholder<'t, 'r>>,
    /// Absolute index of the next `}`; `Some(None)` once none remain.
    next_close: Option<Option<usize>>,
}

impl<'t, 'r> Segments<'t, 'r> {
    /// Scan `template` against `registry`.
    pub fn new(template: View<'t>, registry: &'r ShowRegistry) -> Self {
        Self {
            template,
            registry,
            pos: 0,
            pending: None,
            next_close: None,
        }
    }

    /// Absolute index of the first `}` at or after `from`.
    fn close_from(&mut self, from: usize) -> Option<usize> {
        match self.next_close {
            Some(Some(close)) if close >= from => return Some(close),
            Some(None) => return None,
            _ => {}
        }
        // `find` is relative to its start; renormalize to an absolute index.
        let close = self.template.find(b'}', from).map(|rel| from + rel);
        self.next_close = Some(close);
        close
    }

    /// Try to resolve a placeholder whose `{` is at absolute index `open`.
    fn resolve(&mut self, open: usize) -> Option<Placeholder<'t, 'r>> {
        let Some(close) = self.close_from(open + 1) else {
            trace!(offset = open, "unterminated placeholder, writing '{{' literally");
            return None;
        };
        let name = self.template.subrange(open + 1, close - open - 1).ok()?;
        match self.registry.lookup(&name) {
            Some(descriptor) => Some(Placeholder {
                name,
                open,
                close,
                descriptor,
            }),
            None => {
                trace!(offset = open, name = %name, "unknown placeholder type, writing '{{' literally");
                None
            }
        }
    }
}

impl<'t, 'r> Iterator for Segments<'t, 'r> {
    type Item = Segment<'t, 'r>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(placeholder) = self.pending.take() {
            self.pos = placeholder.close + 1;
            return Some(Segment::Placeholder(placeholder));
        }

        let bytes = self.template.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        let mut i = start;
        while i < bytes.len() {
            if bytes[i] == b'{'
                && let Some(placeholder) = self.resolve(i)
            {
                if i == start {
                    self.pos = placeholder.close + 1;
                    return Some(Segment::Placeholder(placeholder));
                }
                self.pending = Some(placeholder);
                self.pos = i;
                return Some(Segment::Literal(&bytes[start..i]));
            }
            i += 1;
        }

        self.pos = bytes.len();
        Some(Segment::Literal(&bytes[start..]))
    }
}
