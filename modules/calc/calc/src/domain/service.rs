//! Domain service for calc
//!
//! Integer arithmetic on `i32` with two's-complement wrapping. Division by
//! zero is masked as `0` by `divide`; the `checked_*` variants report it (and
//! overflow) as `CalcError` instead.

use calc_sdk::{CalcError, Operation};
use tracing::{debug, warn};

use crate::config::CalcConfig;

/// Stateless arithmetic service.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalcConfig,
}

impl Service {
    /// Create a new service.
    #[must_use]
    pub const fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> CalcConfig {
        self.config
    }

    #[must_use]
    pub fn add(&self, a: i32, b: i32) -> i32 {
        self.trace(Operation::Add, a, b);
        a.wrapping_add(b)
    }

    #[must_use]
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        self.trace(Operation::Subtract, a, b);
        a.wrapping_sub(b)
    }

    #[must_use]
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        self.trace(Operation::Multiply, a, b);
        a.wrapping_mul(b)
    }

    /// Truncating division; `0` when `b == 0`.
    #[must_use]
    pub fn divide(&self, a: i32, b: i32) -> i32 {
        self.trace(Operation::Divide, a, b);
        if b == 0 {
            warn!(dividend = a, "division by zero, returning 0");
            return 0;
        }
        a.wrapping_div(b)
    }

    /// # Errors
    /// `CalcError::Overflow` if the sum does not fit in `i32`.
    pub fn checked_add(&self, a: i32, b: i32) -> Result<i32, CalcError> {
        self.trace(Operation::Add, a, b);
        a.checked_add(b)
            .ok_or(CalcError::overflow(Operation::Add, a, b))
    }

    /// # Errors
    /// `CalcError::Overflow` if the difference does not fit in `i32`.
    pub fn checked_subtract(&self, a: i32, b: i32) -> Result<i32, CalcError> {
        self.trace(Operation::Subtract, a, b);
        a.checked_sub(b)
            .ok_or(CalcError::overflow(Operation::Subtract, a, b))
    }

    /// # Errors
    /// `CalcError::Overflow` if the product does not fit in `i32`.
    pub fn checked_multiply(&self, a: i32, b: i32) -> Result<i32, CalcError> {
        self.trace(Operation::Multiply, a, b);
        a.checked_mul(b)
            .ok_or(CalcError::overflow(Operation::Multiply, a, b))
    }

    /// # Errors
    /// `CalcError::DivisionByZero` if `b == 0`, `CalcError::Overflow` for `i32::MIN / -1`.
    pub fn checked_divide(&self, a: i32, b: i32) -> Result<i32, CalcError> {
        self.trace(Operation::Divide, a, b);
        if b == 0 {
            return Err(CalcError::DivisionByZero { dividend: a });
        }
        a.checked_div(b)
            .ok_or(CalcError::overflow(Operation::Divide, a, b))
    }

    fn trace(&self, op: Operation, a: i32, b: i32) {
        if self.config.trace_operations {
            debug!(%op, a, b, "performing arithmetic");
        }
    }
}
