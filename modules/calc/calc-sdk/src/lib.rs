//! Calc SDK
//!
//! This crate provides the public API for the `calc` module:
//! - `CalcApi` trait for integer arithmetic
//! - `Operation` naming the four arithmetic operations
//! - `CalcError` for the checked variants
//!
//! ## Usage
//!
//! Consumers obtain the client from `ClientHub`, or take it as a constructor argument:
//! ```ignore
//! use calc_sdk::CalcApi;
//!
//! let calc = hub.get::<dyn CalcApi>()?;
//! let sum = calc.add(2, 3);
//! let quotient = calc.divide(sum, 0); // 0, division by zero is masked
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::CalcApi;
pub use error::CalcError;
pub use models::Operation;
