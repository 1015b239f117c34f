//! `CalcApi` trait definition.

/// Integer arithmetic on `i32`.
///
/// Results wrap on overflow (two's complement). Implementations must be
/// pure: same inputs, same output, no observable side effects besides logging.
///
/// Consumers hold it as `Arc<dyn CalcApi>`, either resolved from `ClientHub`
/// or passed in directly, so tests can substitute their own implementation.
pub trait CalcApi: Send + Sync {
    /// `a + b`, wrapping on overflow.
    fn add(&self, a: i32, b: i32) -> i32;

    /// `a - b`, wrapping on overflow.
    fn subtract(&self, a: i32, b: i32) -> i32;

    /// `a * b`, wrapping on overflow.
    fn multiply(&self, a: i32, b: i32) -> i32;

    /// `a / b` truncated toward zero.
    ///
    /// Returns `0` when `b == 0`; callers cannot tell that apart from a real
    /// zero quotient. `i32::MIN / -1` wraps to `i32::MIN`.
    fn divide(&self, a: i32, b: i32) -> i32;
}
