//! Greeting Module
//!
//! Friendly phrases for an optional name:
//! ```ignore
//! assert_eq!(greeting::hello(Some("Alice")), "Hello, Alice!");
//! assert_eq!(greeting::goodbye(None), "Goodbye, stranger!");
//! ```
//!
//! Each call returns an owned `String`, so results stay valid and unchanged
//! no matter how many calls follow, on any thread.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod domain;

pub use domain::{DEFAULT_NAME, Greeting, greet};

/// `"Hello, {name}!"`, or `"Hello, stranger!"` when `name` is `None` or empty.
#[must_use]
pub fn hello(name: Option<&str>) -> String {
    greet(Greeting::Hello, name)
}

/// `"Goodbye, {name}!"`, or `"Goodbye, stranger!"` when `name` is `None` or empty.
#[must_use]
pub fn goodbye(name: Option<&str>) -> String {
    greet(Greeting::Goodbye, name)
}
