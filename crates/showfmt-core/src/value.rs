//! Tagged argument values.
//!
//! [`ShowValue`] is the argument type for rendering. Each variant carries its
//! own kind, so the renderer never has to reinterpret an opaque handle: the
//! width class is derived from the variant and checked against the
//! placeholder's descriptor before dispatch.

use std::any::Any;
use std::ffi::CStr;
use std::fmt;

use crate::{View, WidthClass};

/// A single rendering argument.
///
/// Values borrow their text for `'a`; nothing is copied into the argument
/// list. `Native` holds a reference to any registered Rust type so that
/// custom show functions can downcast it.
#[derive(Clone, Copy)]
pub enum ShowValue<'a> {
    /// 32-bit signed integer.
    Int(i32),
    /// Single character.
    Char(char),
    /// Two-state boolean.
    Bool(bool),
    /// NUL-terminated string.
    CStr(&'a CStr),
    /// Borrowed string view with an explicit length.
    Str(View<'a>),
    /// Double-precision float.
    Float(f64),
    /// Reference to a caller-defined type.
    Native(&'a (dyn Any + Send + Sync)),
}

impl<'a> ShowValue<'a> {
    /// Wrap a reference to any caller-defined type.
    pub fn native<T: Any + Send + Sync>(value: &'a T) -> Self {
        ShowValue::Native(value)
    }

    /// The width class this value occupies in the argument list.
    pub fn width_class(&self) -> WidthClass {
        match self {
            ShowValue::Int(_) | ShowValue::Char(_) | ShowValue::Bool(_) => WidthClass::Inline4,
            ShowValue::CStr(_) | ShowValue::Str(_) | ShowValue::Native(_) => WidthClass::Inline8,
            ShowValue::Float(_) => WidthClass::FloatSpecial,
        }
    }

    /// Get a human-readable name for this value's kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ShowValue::Int(_) => "int",
            ShowValue::Char(_) => "char",
            ShowValue::Bool(_) => "bool",
            ShowValue::CStr(_) => "cstr",
            ShowValue::Str(_) => "str",
            ShowValue::Float(_) => "float",
            ShowValue::Native(_) => "native",
        }
    }

    /// Downcast a `Native` value to a concrete type.
    pub fn downcast_native<T: Any>(&self) -> Option<&'a T> {
        match *self {
            ShowValue::Native(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for ShowValue<'_> {
    /// `Native` values never compare equal; they have no common equality.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ShowValue::Int(a), ShowValue::Int(b)) => a == b,
            (ShowValue::Char(a), ShowValue::Char(b)) => a == b,
            (ShowValue::Bool(a), ShowValue::Bool(b)) => a == b,
            (ShowValue::CStr(a), ShowValue::CStr(b)) => a == b,
            (ShowValue::Str(a), ShowValue::Str(b)) => a == b,
            (ShowValue::Float(a), ShowValue::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for ShowValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowValue::Int(v) => write!(f, "Int({})", v),
            ShowValue::Char(c) => write!(f, "Char({:?})", c),
            ShowValue::Bool(b) => write!(f, "Bool({})", b),
            ShowValue::CStr(s) => write!(f, "CStr({:?})", s),
            ShowValue::Str(v) => write!(f, "Str({:?})", v.to_str_lossy()),
            ShowValue::Float(v) => write!(f, "Float({})", v),
            ShowValue::Native(_) => write!(f, "Native(...)"),
        }
    }
}

impl From<i32> for ShowValue<'_> {
    fn from(v: i32) -> Self {
        ShowValue::Int(v)
    }
}

impl From<char> for ShowValue<'_> {
    fn from(c: char) -> Self {
        ShowValue::Char(c)
    }
}

impl From<bool> for ShowValue<'_> {
    fn from(b: bool) -> Self {
        ShowValue::Bool(b)
    }
}

impl From<f64> for ShowValue<'_> {
    fn from(v: f64) -> Self {
        ShowValue::Float(v)
    }
}

impl From<f32> for ShowValue<'_> {
    /// Widened to `f64`, matching C's default argument promotion.
    fn from(v: f32) -> Self {
        ShowValue::Float(f64::from(v))
    }
}

impl<'a> From<&'a CStr> for ShowValue<'a> {
    fn from(s: &'a CStr) -> Self {
        ShowValue::CStr(s)
    }
}

impl<'a> From<&'a str> for ShowValue<'a> {
    fn from(s: &'a str) -> Self {
        ShowValue::Str(View::from(s))
    }
}

impl<'a> From<View<'a>> for ShowValue<'a> {
    fn from(v: View<'a>) -> Self {
        ShowValue::Str(v)
    }
}
