pub mod error;


pub use error::ConfigError;

use crate::source::ConnectionSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Construction parameters for a new source, handed to the driver builder.
///
/// `params` carries driver-specific extras (pool sizes, TLS options, ...)
/// that this crate does not interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub driver: String,
    pub url: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub params: serde_json::Value,
}

impl SourceConfig {
    pub fn new(driver: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            url: url.into(),
            username: None,
            password: None,
            params: serde_json::Value::Null,
        }
    }
}

/// Options accepted when binding a source into the plugin.
///
/// Exactly one of the two construction paths is taken: a pre-built source
/// is used as-is, otherwise a new one is built from `config`.
#[derive(Default)]
pub struct BindOptions {
    /// Register under this namespace; `None` uses the default slot.
    pub namespace: Option<String>,

    /// Pre-built source, used as-is when present.
    pub source: Option<Arc<dyn ConnectionSource>>,

    /// Construction parameters for a new source when `source` is absent.
    pub config: Option<SourceConfig>,
}

impl BindOptions {
    pub fn with_source(source: Arc<dyn ConnectionSource>) -> Self {
        Self {
            namespace: None,
            source: Some(source),
            config: None,
        }
    }

    pub fn from_config(config: SourceConfig) -> Self {
        Self {
            namespace: None,
            source: None,
            config: Some(config),
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl std::fmt::Debug for BindOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindOptions")
            .field("namespace", &self.namespace)
            .field("source", &self.source.as_ref().map(|_| ".."))
            .field("config", &self.config)
            .finish()
    }
}
