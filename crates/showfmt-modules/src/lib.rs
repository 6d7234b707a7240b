//! Built-in show functions for showfmt.
//!
//! - **primitives** - `int`, `char`, `bool` (`Inline4`)
//! - **string** - `cstr`, `str` (`Inline8`)
//! - **float** - `float`, `double` (formatted inline by the renderer)
//!
//! # Usage
//!
//! ```
//! use showfmt_registry::ShowRegistry;
//!
//! let mut registry = ShowRegistry::new();
//! registry.install(showfmt_modules::default_module()).unwrap();
//! assert!(registry.contains("cstr"));
//! ```

pub mod float;
pub mod primitives;
pub mod string;

use showfmt_core::WidthClass;
use showfmt_registry::Module;

pub use float::{FloatStyle, format_float, format_general, write_float};
pub use primitives::{show_bool, show_char, show_int};
pub use string::{show_cstr, show_str};

/// Name of the module returned by [`default_module`].
pub const DEFAULT_MODULE_NAME: &str = "builtin";

/// The built-in types, in their canonical registration order:
/// `int`, `str`, `bool`, `char`, `cstr`, `float`, `double`.
pub fn default_module() -> Module {
    Module::new(DEFAULT_MODULE_NAME)
        .show("int", WidthClass::Inline4, show_int)
        .show("str", WidthClass::Inline8, show_str)
        .show("bool", WidthClass::Inline4, show_bool)
        .show("char", WidthClass::Inline4, show_char)
        .show("cstr", WidthClass::Inline8, show_cstr)
        .float("float")
        .float("double")
}

#[cfg(test)]
mod tests {
    use super::*;
    use showfmt_registry::ShowRegistry;

    #[test]
    fn default_module_order() {
        let m = default_module();
        assert_eq!(m.name(), DEFAULT_MODULE_NAME);
        let names: Vec<_> = m.names().collect();
        assert_eq!(
            names,
            ["int", "str", "bool", "char", "cstr", "float", "double"]
        );
    }

    #[test]
    fn default_module_installs() {
        let mut registry = ShowRegistry::new();
        registry.install(default_module()).unwrap();
        assert_eq!(registry.len(), 7);

        let width = |name: &str| registry.get(name).map(|d| d.width());
        assert_eq!(width("int"), Some(WidthClass::Inline4));
        assert_eq!(width("bool"), Some(WidthClass::Inline4));
        assert_eq!(width("char"), Some(WidthClass::Inline4));
        assert_eq!(width("str"), Some(WidthClass::Inline8));
        assert_eq!(width("cstr"), Some(WidthClass::Inline8));
        assert_eq!(width("float"), Some(WidthClass::FloatSpecial));
        assert_eq!(width("double"), Some(WidthClass::FloatSpecial));
    }
}
