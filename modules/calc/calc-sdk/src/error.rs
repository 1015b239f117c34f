//! Error type for the checked arithmetic variants.

use crate::models::Operation;

/// Error returned by checked arithmetic.
///
/// The plain `CalcApi` operations never fail; they wrap on overflow and
/// mask division by zero as `0`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i32 },

    #[error("integer overflow: {a} {} {b}", .op.symbol())]
    Overflow { op: Operation, a: i32, b: i32 },
}

impl CalcError {
    #[must_use]
    pub fn overflow(op: Operation, a: i32, b: i32) -> Self {
        Self::Overflow { op, a, b }
    }

    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
