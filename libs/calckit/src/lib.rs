//! Calckit
//!
//! Shared wiring used by the workspace modules:
//! - `ClientHub` for registering and resolving module APIs by trait type
//! - `ModuleCtx` and the `Module` trait for module initialization
//! - Typed configuration loading (`config`)
//! - Logging setup on top of `tracing-subscriber` (`logging`)
//!
//! ## Usage
//!
//! ```ignore
//! let app = AppConfig::load(Some(Path::new("calc.yaml")))?;
//! init_logging(&app.logging)?;
//!
//! let hub = Arc::new(ClientHub::new());
//! let provider: Arc<dyn ConfigProvider> = Arc::new(app);
//! let ctx = ModuleCtx::for_module("calc", provider, hub.clone());
//! CalcModule.init(&ctx)?;
//!
//! let calc = hub.get::<dyn CalcApi>()?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client_hub;
pub mod config;
pub mod context;
pub mod logging;

pub use client_hub::{ClientHub, ClientHubError};
pub use config::{AppConfig, ConfigError, ConfigProvider};
pub use context::{Module, ModuleCtx, init_modules};
pub use logging::{LogFormat, LoggingConfig, init_logging};
