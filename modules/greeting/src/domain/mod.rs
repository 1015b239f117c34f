//! Domain layer for greeting module

pub mod greeting;

pub use greeting::{DEFAULT_NAME, Greeting, greet};
