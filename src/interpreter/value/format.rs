/// Significant digits used by `%g` when no precision is given.
pub const PRECISION: usize = 6;

/// Formats a number exactly as C's `printf("%g", value)` does.
///
/// The value is rounded to [`PRECISION`] significant digits. If the decimal
/// exponent `X` of the rounded value satisfies `-4 <= X < PRECISION`, fixed
/// notation is used; otherwise exponent notation with a sign and at least two
/// exponent digits. Trailing zeros, and a trailing decimal point, are removed.
///
/// # Example
/// ```
/// use alphadelta::interpreter::value::format::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// assert_eq!(format_number(1_000_000.0), "1e+06");
/// assert_eq!(format_number(0.000_012_5), "1.25e-05");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // Rounding to the target precision can carry into the next power of ten,
    // so the exponent is read back from the rounded scientific form.
    let scientific = format!("{value:.prec$e}", prec = PRECISION - 1);
    let (mantissa, exponent) = scientific.split_once('e')
                                         .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);

    let precision = i64::try_from(PRECISION).unwrap_or(i64::MAX);
    if (-4..precision).contains(&exponent) {
        let decimals = usize::try_from(precision - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    }
}

/// Strips trailing zeros after a decimal point, then the point itself.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
