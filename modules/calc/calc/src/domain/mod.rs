//! Domain layer for calc module

pub mod service;

pub use service::Service;
