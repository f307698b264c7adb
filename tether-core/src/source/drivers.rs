use crate::conf::error::ConfigError;
use crate::conf::SourceConfig;
use crate::source::ConnectionSource;
use crate::source::memory::MemorySource;
use std::collections::HashMap;
use std::sync::Arc;

type DriverBuilder = fn(&SourceConfig) -> anyhow::Result<Arc<dyn ConnectionSource>>;

fn build_memory(cfg: &SourceConfig) -> anyhow::Result<Arc<dyn ConnectionSource>> {
    Ok(Arc::new(MemorySource::new(&cfg.url)))
}

/// Table of source builders keyed by driver name.
///
/// Ships with the `memory` builtin; embedders add one entry per real
/// database driver they bring.
pub struct DriverTable {
    builders: HashMap<String, DriverBuilder>,
}

impl Default for DriverTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DriverTable {
    /// Table containing only the builtin drivers.
    pub fn builtin() -> Self {
        let mut builders = HashMap::new();
        builders.insert("memory".to_string(), build_memory as DriverBuilder);
        Self { builders }
    }

    pub fn insert(&mut self, driver: impl Into<String>, builder: DriverBuilder) {
        self.builders.insert(driver.into(), builder);
    }

    /// Build a new source from configuration.
    pub fn build(&self, cfg: &SourceConfig) -> Result<Arc<dyn ConnectionSource>, ConfigError> {
        let builder = self
            .builders
            .get(&cfg.driver)
            .ok_or_else(|| ConfigError::UnknownDriver {
                driver: cfg.driver.clone(),
            })?;

        builder(cfg).map_err(|source| ConfigError::BuildSource {
            driver: cfg.driver.clone(),
            source,
        })
    }
}
