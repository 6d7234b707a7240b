//! Floating-point formatting.
//!
//! Float placeholders have no show function: the renderer formats them with
//! [`format_float`]. The default [`FloatStyle::General`] reproduces C's `%g`
//! conversion (six significant digits, trailing zeros removed, scientific
//! notation for very small or large magnitudes).

use std::io;

/// How float placeholders are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatStyle {
    /// C `%g`: six significant digits. `420.69` renders as `420.69`,
    /// `1e-5` as `1e-05`, `123456789.0` as `1.23457e+08`.
    #[default]
    General,
    /// Shortest representation that round-trips, as Rust's `{}` prints it.
    Shortest,
}

/// Significant digits used by [`FloatStyle::General`].
pub const GENERAL_PRECISION: usize = 6;

/// Format `value` in the given style.
pub fn format_float(value: f64, style: FloatStyle) -> String {
    match style {
        FloatStyle::General => format_general(value, GENERAL_PRECISION),
        FloatStyle::Shortest => value.to_string(),
    }
}

/// Write `value` to `out` in the given style.
pub fn write_float(out: &mut dyn io::Write, value: f64, style: FloatStyle) -> io::Result<()> {
    out.write_all(format_float(value, style).as_bytes())
}

/// Format `value` like C's `%.{precision}g`.
///
/// A precision of zero is treated as one, as in C.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // Round to `precision` significant digits first; the exponent of the
    // rounded value picks the notation.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn g(value: f64) -> String {
        format_general(value, GENERAL_PRECISION)
    }

    #[test]
    fn general_fixed_notation() {
        assert_eq!(g(420.69), "420.69");
        assert_eq!(g(1.0), "1");
        assert_eq!(g(-2.5), "-2.5");
        assert_eq!(g(0.1), "0.1");
        assert_eq!(g(100000.0), "100000");
        assert_eq!(g(0.0001), "0.0001");
    }

    #[test]
    fn general_rounds_to_six_digits() {
        assert_eq!(g(1.23456789), "1.23457");
        assert_eq!(g(2.0 / 3.0), "0.666667");
        assert_eq!(g(123456.7), "123457");
    }

    #[test]
    fn general_scientific_notation() {
        assert_eq!(g(1e-5), "1e-05");
        assert_eq!(g(0.000012345), "1.2345e-05");
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(123456789.0), "1.23457e+08");
        assert_eq!(g(1e100), "1e+100");
        assert_eq!(g(-4.5e-10), "-4.5e-10");
    }

    #[test]
    fn general_rounding_bumps_exponent() {
        // 999999.7 rounds to 1.00000e6, which switches to scientific.
        assert_eq!(g(999999.7), "1e+06");
        assert_eq!(g(999999.4), "999999");
    }

    #[test]
    fn general_special_values() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
        assert_eq!(g(f64::NAN), "nan");
    }

    #[test]
    fn general_custom_precision() {
        assert_eq!(format_general(420.69, 3), "421");
        assert_eq!(format_general(420.69, 0), "4e+02");
        assert_eq!(format_general(420.69, 10), "420.69");
    }

    #[test]
    fn shortest_style() {
        assert_eq!(format_float(420.69, FloatStyle::Shortest), "420.69");
        assert_eq!(format_float(0.1 + 0.2, FloatStyle::Shortest), "0.30000000000000004");
        assert_eq!(format_float(0.1 + 0.2, FloatStyle::General), "0.3");
    }

    #[test]
    fn write_float_to_sink() {
        let mut out = Vec::new();
        write_float(&mut out, 420.69, FloatStyle::default()).unwrap();
        assert_eq!(out, b"420.69");
    }
}
