/// Numeric conversion helpers.
///
/// Conversions between `f64`, `i64` and `usize` used when a runtime number
/// has to become an array index.
pub mod num;
