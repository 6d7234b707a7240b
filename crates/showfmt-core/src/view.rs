//! Borrowed byte views for zero-copy template scanning.
//!
//! Provides [`View`], a non-owning `(offset, len)` window over a byte buffer.
//! Templates, placeholder names, and `str` arguments are all carried as views
//! so that scanning never copies the underlying text.

use std::borrow::Cow;
use std::fmt;

use crate::ViewError;

/// A non-owning view over a contiguous range of bytes.
///
/// The view never outlives the buffer it borrows. `offset + len` is always
/// within `data`; every constructor and [`View::subrange`] uphold this.
#[derive(Clone, Copy)]
pub struct View<'a> {
    data: &'a [u8],
    offset: usize,
    len: usize,
}

impl<'a> View<'a> {
    /// Wrap an entire buffer.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            len: data.len(),
        }
    }

    /// Wrap a buffer up to (not including) its first NUL byte.
    ///
    /// If the buffer contains no NUL, the whole buffer is viewed.
    pub fn from_nul_terminated(data: &'a [u8]) -> Self {
        let len = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Self {
            data,
            offset: 0,
            len,
        }
    }

    /// Number of bytes in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The viewed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.data[self.offset..self.offset + self.len]
    }

    /// Offset of this view inside the buffer it borrows.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Create a sub-view of `len` bytes starting at `start`.
    ///
    /// Both `start` and `len` are relative to this view. The result borrows
    /// the same buffer; nothing is copied.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfBounds`] if `start + len` exceeds this view.
    pub fn subrange(&self, start: usize, len: usize) -> Result<View<'a>, ViewError> {
        match start.checked_add(len) {
            Some(end) if end <= self.len => Ok(View {
                data: self.data,
                offset: self.offset + start,
                len,
            }),
            _ => Err(ViewError::OutOfBounds {
                start,
                len,
                available: self.len,
            }),
        }
    }

    /// Find the first `byte` at or after `from`.
    ///
    /// The result is an offset relative to `from`, not to the start of the
    /// view: a match at absolute index `from + k` returns `Some(k)`. Returns
    /// `None` if there is no match or `from` is past the end.
    pub fn find(&self, byte: u8, from: usize) -> Option<usize> {
        self.as_bytes()
            .get(from..)?
            .iter()
            .position(|&b| b == byte)
    }

    /// Decode the view as UTF-8, replacing invalid sequences.
    pub fn to_str_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl PartialEq for View<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for View<'_> {}

impl PartialEq<str> for View<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for View<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<'a> From<&'a str> for View<'a> {
    fn from(s: &'a str) -> Self {
        View::new(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for View<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        View::new(bytes)
    }
}

impl<'a> From<&'a String> for View<'a> {
    fn from(s: &'a String) -> Self {
        View::new(s.as_bytes())
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "View({:?})", self.to_str_lossy())
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}
