//! Module context and lifecycle.
//!
//! Every module gets a `ModuleCtx` during `init`. It provides:
//! - **Configuration**: typed config loading via `config()`
//! - **Wiring**: the shared `ClientHub` for registering and consuming module APIs
//!
//! ```ignore
//! fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
//!     let cfg: MyConfig = ctx.config()?;
//!     let other = ctx.client_hub().get::<dyn OtherApi>()?;
//!     ctx.client_hub().register::<dyn MyApi>(Arc::new(MyClient::new(cfg, other)));
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use serde::de::DeserializeOwned;

use crate::client_hub::ClientHub;
use crate::config::{ConfigError, ConfigProvider, module_config_or_default};

/// A unit of wiring: reads its config and registers its API in the hub.
pub trait Module: Send + Sync {
    /// Initialize the module.
    ///
    /// # Errors
    /// Returns an error if configuration is invalid or a required client is missing.
    fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()>;
}

/// Per-module execution context.
#[derive(Clone)]
pub struct ModuleCtx {
    module_name: Arc<str>,
    config_provider: Arc<dyn ConfigProvider>,
    client_hub: Arc<ClientHub>,
}

impl ModuleCtx {
    /// Create a context for `module_name` sharing the given provider and hub.
    #[must_use]
    pub fn for_module(
        module_name: impl Into<Arc<str>>,
        config_provider: Arc<dyn ConfigProvider>,
        client_hub: Arc<ClientHub>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            config_provider,
            client_hub,
        }
    }

    #[inline]
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    #[inline]
    #[must_use]
    pub fn config_provider(&self) -> &dyn ConfigProvider {
        &*self.config_provider
    }

    #[inline]
    #[must_use]
    pub fn client_hub(&self) -> &ClientHub {
        &self.client_hub
    }

    /// Typed module config from `modules.<name>.config`, or `T::default()` if absent.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the section exists but does not match `T`.
    pub fn config<T: DeserializeOwned + Default>(&self) -> Result<T, ConfigError> {
        module_config_or_default(self.config_provider.as_ref(), &self.module_name)
    }
}

/// Initialize `modules` in the given order against one hub.
///
/// Providers must come before their consumers.
///
/// # Errors
/// Stops at the first failing module and returns its error with the module name attached.
pub fn init_modules(
    modules: &[(&str, &dyn Module)],
    config_provider: &Arc<dyn ConfigProvider>,
    client_hub: &Arc<ClientHub>,
) -> anyhow::Result<()> {
    tracing::info!("Phase: init");

    for (name, module) in modules {
        let ctx = ModuleCtx::for_module(*name, Arc::clone(config_provider), Arc::clone(client_hub));
        module
            .init(&ctx)
            .with_context(|| format!("module '{name}' init failed"))?;
        tracing::info!(module = *name, "module initialized");
    }

    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use serde::Deserialize;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct PrefixConfig {
        prefix: String,
    }

    trait Labeler: Send + Sync {
        fn label(&self, value: i32) -> String;
    }

    struct Prefixed(String);
    impl Labeler for Prefixed {
        fn label(&self, value: i32) -> String {
            format!("{}{value}", self.0)
        }
    }

    struct LabelModule;
    impl Module for LabelModule {
        fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
            let cfg: PrefixConfig = ctx.config()?;
            ctx.client_hub()
                .register::<dyn Labeler>(Arc::new(Prefixed(cfg.prefix)));
            Ok(())
        }
    }

    struct NeedsLabeler;
    impl Module for NeedsLabeler {
        fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
            ctx.client_hub().get::<dyn Labeler>()?;
            Ok(())
        }
    }

    fn provider(prefix: &str) -> Arc<dyn ConfigProvider> {
        let mut modules = HashMap::new();
        modules.insert(
            "labels".to_owned(),
            serde_json::json!({ "config": { "prefix": prefix } }),
        );
        Arc::new(AppConfig {
            modules,
            ..AppConfig::default()
        })
    }

    #[test]
    fn ctx_exposes_name_and_typed_config() {
        let ctx = ModuleCtx::for_module("labels", provider("n="), Arc::new(ClientHub::new()));
        assert_eq!(ctx.module_name(), "labels");

        let cfg: PrefixConfig = ctx.config().unwrap();
        assert_eq!(cfg.prefix, "n=");
    }

    #[test]
    #[traced_test]
    fn init_modules_wires_in_order() {
        let hub = Arc::new(ClientHub::new());
        init_modules(
            &[("labels", &LabelModule), ("consumer", &NeedsLabeler)],
            &provider("#"),
            &hub,
        )
        .unwrap();

        assert_eq!(hub.get::<dyn Labeler>().unwrap().label(7), "#7");
        assert!(logs_contain("module initialized"));
    }

    #[test]
    fn init_modules_reports_failing_module() {
        let hub = Arc::new(ClientHub::new());
        let err = init_modules(&[("consumer", &NeedsLabeler)], &provider(""), &hub).unwrap_err();

        assert_eq!(err.to_string(), "module 'consumer' init failed");
        assert!(format!("{err:#}").contains("client not found"));
    }
}
