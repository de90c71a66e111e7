//! Text conversions for booleans, integers and floating-point numbers.
//!
//! Booleans are written as `"1"` / `"0"`.  Parsing accepts those plus the
//! usual textual spellings (`t`, `true`, `TRUE`, `True` and their `false`
//! counterparts).  Floats are written in fixed notation: 7 fractional digits
//! for `f32`, 16 for `f64`.

use super::ConvertError;

/// Fractional digits used by [`float_to_str`].
pub const FLOAT_PRECISION: usize = 7;

/// Fractional digits used by [`double_to_str`].
pub const DOUBLE_PRECISION: usize = 16;

fn parse_error(input: &str, target: &'static str) -> ConvertError {
    ConvertError::Parse {
        input: input.to_string(),
        target,
    }
}

// ── Booleans ──────────────────────────────────────────────────────────────────

/// Returns `"1"` for `true` and `"0"` for `false`.
pub fn bool_to_str(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

/// Returns `1` for `true` and `0` for `false`.
pub fn bool_to_int(b: bool) -> i64 {
    i64::from(b)
}

/// Parses a boolean.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] for anything other than `1`, `t`, `T`,
/// `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false`, `False`.
///
/// # Examples
///
/// ```rust
/// use rtl_core::convert::str_to_bool;
/// assert_eq!(str_to_bool("1"), Ok(true));
/// assert_eq!(str_to_bool("False"), Ok(false));
/// assert!(str_to_bool("yes").is_err());
/// ```
pub fn str_to_bool(s: &str) -> Result<bool, ConvertError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(parse_error(s, "bool")),
    }
}

/// Parses a boolean, returning `default` when `s` is not a boolean.
pub fn str_to_bool_def(s: &str, default: bool) -> bool {
    str_to_bool(s).unwrap_or(default)
}

// ── Integers ──────────────────────────────────────────────────────────────────

/// Formats `i` in decimal.
pub fn int_to_str(i: i64) -> String {
    i.to_string()
}

/// Formats `u` in decimal.
pub fn uint_to_str(u: u64) -> String {
    u.to_string()
}

/// Parses a signed decimal integer (an optional leading `+` or `-` is
/// allowed; surrounding whitespace is not).
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] if `s` is not a valid `i64`.
pub fn str_to_int(s: &str) -> Result<i64, ConvertError> {
    s.parse().map_err(|_| parse_error(s, "int"))
}

/// Parses a signed decimal integer, returning `default` on failure.
pub fn str_to_int_def(s: &str, default: i64) -> i64 {
    str_to_int(s).unwrap_or(default)
}

/// Parses an unsigned decimal integer.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] if `s` is not a valid `u64`.
pub fn str_to_uint(s: &str) -> Result<u64, ConvertError> {
    s.parse().map_err(|_| parse_error(s, "uint"))
}

/// Parses an unsigned decimal integer, returning `default` on failure.
pub fn str_to_uint_def(s: &str, default: u64) -> u64 {
    str_to_uint(s).unwrap_or(default)
}

// ── Floating point ────────────────────────────────────────────────────────────

/// Formats `f` with [`FLOAT_PRECISION`] fractional digits.
pub fn float_to_str(f: f32) -> String {
    float_to_str_prec(f, FLOAT_PRECISION)
}

/// Formats `f` with [`DOUBLE_PRECISION`] fractional digits.
///
/// ```rust
/// use rtl_core::convert::double_to_str;
/// assert_eq!(double_to_str(1.5), "1.5000000000000000");
/// ```
pub fn double_to_str(f: f64) -> String {
    double_to_str_prec(f, DOUBLE_PRECISION)
}

/// Formats `f` with `prec` fractional digits.
pub fn float_to_str_prec(f: f32, prec: usize) -> String {
    double_to_str_prec(f64::from(f), prec)
}

/// Formats `f` with `prec` fractional digits.
pub fn double_to_str_prec(f: f64, prec: usize) -> String {
    format!("{f:.prec$}")
}

/// Parses a single-precision float.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] if `s` is not a valid number.
pub fn str_to_float(s: &str) -> Result<f32, ConvertError> {
    s.parse().map_err(|_| parse_error(s, "float"))
}

/// Parses a double-precision float.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] if `s` is not a valid number.
pub fn str_to_double(s: &str) -> Result<f64, ConvertError> {
    s.parse().map_err(|_| parse_error(s, "double"))
}

/// Parses a double-precision float, returning `default` on failure.
pub fn str_to_double_def(s: &str, default: f64) -> f64 {
    str_to_double(s).unwrap_or(default)
}
