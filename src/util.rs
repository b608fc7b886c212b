/// Numeric conversion helpers.
///
/// Provides the exact `f64` to `i64` conversion used when deciding whether a
/// result is surfaced as an integer. The conversion never rounds: it either
/// succeeds losslessly or reports that the value is not an integer.
pub mod num;
/// Stack growth for deeply nested recursion.
pub mod stack;
