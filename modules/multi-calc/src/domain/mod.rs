//! Domain layer for multi-calc module

pub mod service;

pub use service::MultiCalcService;
