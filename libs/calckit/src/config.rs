//! Typed module configuration.
//!
//! Module sections live under `modules.<name>.config` in the application
//! config. Two loaders read them:
//!
//! 1. **Lenient** (`module_config_or_default`): falls back to `T::default()` when
//!    the section is missing. Used by `ModuleCtx::config`.
//! 2. **Strict** (`module_config_required`): the section must be present and valid.
//!
//! `AppConfig::load` layers built-in defaults, an optional YAML file and
//! `CALC__`-prefixed environment variables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Prefix for environment overrides; nesting levels are separated by `__`,
/// e.g. `CALC__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CALC__";

/// Configuration error for typed config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("module '{module}' not found")]
    ModuleNotFound { module: String },
    #[error("module '{module}' config must be an object")]
    InvalidModuleStructure { module: String },
    #[error("missing 'config' section in module '{module}'")]
    MissingConfigSection { module: String },
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Provider of module-specific configuration (raw JSON sections only).
pub trait ConfigProvider: Send + Sync {
    /// Returns raw JSON section for the module, if any.
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value>;
}

/// Lenient configuration loader that falls back to defaults.
///
/// - module not present, not an object, or without a `config` field → `Ok(T::default())`
/// - `config` present but invalid → `Err(ConfigError::InvalidConfig)`
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` if the config section exists but cannot be deserialized.
pub fn module_config_or_default<T: DeserializeOwned + Default>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let Some(config_section) = provider
        .get_module_config(module_name)
        .and_then(serde_json::Value::as_object)
        .and_then(|obj| obj.get("config"))
    else {
        return Ok(T::default());
    };

    parse_section(config_section, module_name)
}

/// Strict configuration loader that requires configuration to be present.
///
/// # Errors
/// Returns `ConfigError` if the module is not found, has invalid structure, or config is invalid.
pub fn module_config_required<T: DeserializeOwned>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let module_raw =
        provider
            .get_module_config(module_name)
            .ok_or_else(|| ConfigError::ModuleNotFound {
                module: module_name.to_owned(),
            })?;

    let obj = module_raw
        .as_object()
        .ok_or_else(|| ConfigError::InvalidModuleStructure {
            module: module_name.to_owned(),
        })?;

    let config_section = obj
        .get("config")
        .ok_or_else(|| ConfigError::MissingConfigSection {
            module: module_name.to_owned(),
        })?;

    parse_section(config_section, module_name)
}

fn parse_section<T: DeserializeOwned>(
    section: &serde_json::Value,
    module_name: &str,
) -> Result<T, ConfigError> {
    T::deserialize(section).map_err(|e| ConfigError::InvalidConfig {
        module: module_name.to_owned(),
        source: e,
    })
}

/// Application-level configuration.
///
/// ```yaml
/// logging:
///   level: debug
///   format: json
/// modules:
///   calc:
///     config:
///       trace_operations: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub modules: HashMap<String, serde_json::Value>,
}

impl AppConfig {
    /// Load configuration: defaults, then the YAML file (if given), then env overrides.
    ///
    /// # Errors
    /// Returns `ConfigError::FileNotFound` if `path` does not exist and
    /// `ConfigError::Load` if any layer fails to parse or merge.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        tracing::debug!(
            modules = config.modules.len(),
            level = %config.logging.level,
            "configuration loaded"
        );
        Ok(config)
    }
}

impl ConfigProvider for AppConfig {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.modules.get(module_name)
    }
}
