//! Show functions for pointer-wide (`Inline8`) text values: `cstr`, `str`.

use std::io;

use showfmt_core::{ShowError, ShowValue};

/// Render a `CStr`: every byte up to, not including, the NUL terminator.
pub fn show_cstr(out: &mut dyn io::Write, value: &ShowValue<'_>) -> Result<(), ShowError> {
    match value {
        ShowValue::CStr(s) => {
            out.write_all(s.to_bytes())?;
            Ok(())
        }
        other => Err(ShowError::mismatch("cstr", other.type_name())),
    }
}

/// Render a `Str` view: exactly its length in bytes, NULs included.
pub fn show_str(out: &mut dyn io::Write, value: &ShowValue<'_>) -> Result<(), ShowError> {
    match value {
        ShowValue::Str(view) => {
            out.write_all(view.as_bytes())?;
            Ok(())
        }
        other => Err(ShowError::mismatch("str", other.type_name())),
    }
}
