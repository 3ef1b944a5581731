/// Runtime value representation.
///
/// Defines the `Value` enum (number, string, array), its conversions and its
/// printed form.
pub mod core;
/// Number formatting.
///
/// Renders `f64` values the way C's `%g` conversion does: six significant
/// digits, fixed or exponent notation depending on magnitude.
pub mod format;
