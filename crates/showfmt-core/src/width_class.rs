//! Argument width classes.
//!
//! A [`WidthClass`] says how a placeholder's argument is pulled from the
//! argument list and how it is rendered. The raw codes match the storage size
//! of the argument in a C-style variadic stream, which is also how they are
//! spelled in `ShowRegistry::register_raw`.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// How an argument is carried and dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum WidthClass {
    /// Floating-point value, formatted inline by the renderer.
    ///
    /// Descriptors of this class never carry a show function.
    FloatSpecial = 0,
    /// Narrow value: `bool`, `char`, 32-bit integer.
    Inline4 = 4,
    /// Pointer-wide value: C strings, string views, native references.
    Inline8 = 8,
}

impl WidthClass {
    /// The raw code for this class.
    #[inline]
    pub fn code(self) -> u8 {
        self.into()
    }

    /// Whether descriptors of this class dispatch to a show function.
    #[inline]
    pub fn uses_show_fn(self) -> bool {
        !matches!(self, WidthClass::FloatSpecial)
    }

    /// Human-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            WidthClass::FloatSpecial => "float",
            WidthClass::Inline4 => "inline4",
            WidthClass::Inline8 => "inline8",
        }
    }
}

impl fmt::Display for WidthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
