//! Calc Module
//!
//! Wrapping `i32` arithmetic with divide-by-zero masking.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - arithmetic, plain and checked
//! - `local_client.rs` - `CalcApi` implementation over the service
//! - `module.rs` - registration in the `ClientHub`
//!
//! The free functions below use a default service and are the simplest entry point:
//! ```ignore
//! assert_eq!(calc::divide(-7, 2), -3);
//! assert_eq!(calc::divide(7, 0), 0);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::CalcModule;

// === INTERNAL MODULES ===
pub mod config;
pub mod domain;
mod local_client;

pub use local_client::CalcLocalClient;

pub use calc_sdk::{CalcApi, CalcError, Operation};

use crate::config::CalcConfig;
use crate::domain::Service;

const DEFAULT_SERVICE: Service = Service::new(CalcConfig::DEFAULT);

/// `a + b`, wrapping on overflow.
#[must_use]
pub fn add(a: i32, b: i32) -> i32 {
    DEFAULT_SERVICE.add(a, b)
}

/// `a - b`, wrapping on overflow.
#[must_use]
pub fn subtract(a: i32, b: i32) -> i32 {
    DEFAULT_SERVICE.subtract(a, b)
}

/// `a * b`, wrapping on overflow.
#[must_use]
pub fn multiply(a: i32, b: i32) -> i32 {
    DEFAULT_SERVICE.multiply(a, b)
}

/// `a / b` truncated toward zero, or `0` when `b == 0`.
#[must_use]
pub fn divide(a: i32, b: i32) -> i32 {
    DEFAULT_SERVICE.divide(a, b)
}

/// # Errors
/// `CalcError::Overflow` if the sum does not fit in `i32`.
pub fn checked_add(a: i32, b: i32) -> Result<i32, CalcError> {
    DEFAULT_SERVICE.checked_add(a, b)
}

/// # Errors
/// `CalcError::Overflow` if the difference does not fit in `i32`.
pub fn checked_subtract(a: i32, b: i32) -> Result<i32, CalcError> {
    DEFAULT_SERVICE.checked_subtract(a, b)
}

/// # Errors
/// `CalcError::Overflow` if the product does not fit in `i32`.
pub fn checked_multiply(a: i32, b: i32) -> Result<i32, CalcError> {
    DEFAULT_SERVICE.checked_multiply(a, b)
}

/// # Errors
/// `CalcError::DivisionByZero` if `b == 0`, `CalcError::Overflow` for `i32::MIN / -1`.
pub fn checked_divide(a: i32, b: i32) -> Result<i32, CalcError> {
    DEFAULT_SERVICE.checked_divide(a, b)
}
