//! Formulas built from `CalcApi` calls.
//!
//! The service does no arithmetic of its own: every intermediate value comes
//! from the injected `CalcApi`, and is passed on unchanged. Overflow and
//! division-by-zero behavior are therefore those of the injected client.

use std::sync::Arc;

use calc_sdk::CalcApi;
use tracing::debug;

pub struct MultiCalcService {
    calc: Arc<dyn CalcApi>,
}

impl MultiCalcService {
    /// Divisor used by `average`.
    pub const AVERAGE_DIVISOR: i32 = 3;

    #[must_use]
    pub fn new(calc: Arc<dyn CalcApi>) -> Self {
        Self { calc }
    }

    /// `(a + b) * (c - d)`.
    ///
    /// Calls `add(a, b)`, then `subtract(c, d)`, then `multiply(sum, diff)`.
    #[must_use]
    pub fn expression(&self, a: i32, b: i32, c: i32, d: i32) -> i32 {
        let sum = self.calc.add(a, b);
        let diff = self.calc.subtract(c, d);
        let result = self.calc.multiply(sum, diff);
        debug!(sum, diff, result, "expression evaluated");
        result
    }

    /// `(a + b + c) / 3`, truncated toward zero.
    ///
    /// Calls `add(a, b)`, then `add(first, c)`, then `divide(total, 3)`.
    #[must_use]
    pub fn average(&self, a: i32, b: i32, c: i32) -> i32 {
        let first = self.calc.add(a, b);
        let total = self.calc.add(first, c);
        let result = self.calc.divide(total, Self::AVERAGE_DIVISOR);
        debug!(total, result, "average evaluated");
        result
    }
}
