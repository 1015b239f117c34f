//! Multi-calc Module
//!
//! Two fixed formulas composed from `CalcApi` calls:
//! - `expression(a, b, c, d)` = `(a + b) * (c - d)`
//! - `average(a, b, c)` = `(a + b + c) / 3`, truncated toward zero
//!
//! `MultiCalcService` takes the `CalcApi` as a constructor argument; the free
//! functions below use the default calc client.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::MultiCalcModule;

// === INTERNAL MODULES ===
pub mod domain;

pub use domain::MultiCalcService;

use std::sync::{Arc, LazyLock};

use calc::CalcLocalClient;

static DEFAULT_SERVICE: LazyLock<MultiCalcService> =
    LazyLock::new(|| MultiCalcService::new(Arc::new(CalcLocalClient::default())));

/// `(a + b) * (c - d)` with the default calc client (wrapping arithmetic).
#[must_use]
pub fn expression(a: i32, b: i32, c: i32, d: i32) -> i32 {
    DEFAULT_SERVICE.expression(a, b, c, d)
}

/// `(a + b + c) / 3` with the default calc client (wrapping, truncating).
#[must_use]
pub fn average(a: i32, b: i32, c: i32) -> i32 {
    DEFAULT_SERVICE.average(a, b, c)
}
