//! Show functions for narrow (`Inline4`) values: `int`, `char`, `bool`.

use std::io;

use showfmt_core::{ShowError, ShowValue};

/// Render an `Int` as a signed decimal.
pub fn show_int(out: &mut dyn io::Write, value: &ShowValue<'_>) -> Result<(), ShowError> {
    match value {
        ShowValue::Int(v) => {
            write!(out, "{}", v)?;
            Ok(())
        }
        other => Err(ShowError::mismatch("int", other.type_name())),
    }
}

/// Render a `Char` as the character itself, UTF-8 encoded.
pub fn show_char(out: &mut dyn io::Write, value: &ShowValue<'_>) -> Result<(), ShowError> {
    match value {
        ShowValue::Char(c) => {
            let mut buf = [0u8; 4];
            out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            Ok(())
        }
        other => Err(ShowError::mismatch("char", other.type_name())),
    }
}

/// Render a `Bool` as `true` or `false`.
pub fn show_bool(out: &mut dyn io::Write, value: &ShowValue<'_>) -> Result<(), ShowError> {
    match value {
        ShowValue::Bool(b) => {
            out.write_all(if *b { b"true" } else { b"false" })?;
            Ok(())
        }
        other => Err(ShowError::mismatch("bool", other.type_name())),
    }
}
