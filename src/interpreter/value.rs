/// The caller-facing result type.
///
/// Defines [`core::Number`], the integer-or-float value returned by
/// [`crate::evaluate`], together with the rule that decides which of the two
/// a raw `f64` outcome becomes.
pub mod core;
