use crate::binder::HandleBinder;
use crate::conf::{BindOptions, ConfigError};
use crate::hooks::PipelineHook;
use crate::lifecycle::LifecycleController;
use crate::registry::{Namespace, NamespaceRegistry};
use crate::source::drivers::DriverTable;
use std::sync::Arc;

/// Registration surface: owns the namespace registry and the hook list
/// the host installs into its pipeline.
///
/// Explicitly constructed and handed around; there is no process global.
pub struct TetherPlugin {
    registry: Arc<NamespaceRegistry>,
    drivers: DriverTable,
    hooks: Vec<Arc<dyn PipelineHook>>,
}

impl Default for TetherPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl TetherPlugin {
    pub fn new() -> Self {
        Self::with_drivers(DriverTable::builtin())
    }

    pub fn with_drivers(drivers: DriverTable) -> Self {
        Self {
            registry: Arc::new(NamespaceRegistry::new()),
            drivers,
            hooks: Vec::new(),
        }
    }

    /// Bind a source into the request pipeline.
    ///
    /// A pre-built source is used as-is; otherwise one is constructed from
    /// the config via the driver table. Exactly one of the two paths runs.
    /// Registers the namespace slot and installs a [`HandleBinder`] for it.
    pub fn bind(&mut self, options: BindOptions) -> Result<(), ConfigError> {
        let namespace = Namespace::from(options.namespace);

        let source = match (options.source, options.config) {
            (Some(source), _) => source,
            (None, Some(config)) => self.drivers.build(&config)?,
            (None, None) => return Err(ConfigError::MissingSource),
        };

        let entry = self.registry.register(namespace.clone(), source)?;
        self.hooks.push(Arc::new(HandleBinder::new(entry)));

        tracing::info!(namespace = %namespace, "source bound");
        Ok(())
    }

    /// Hooks to install into the host pipeline, in registration order.
    pub fn hooks(&self) -> &[Arc<dyn PipelineHook>] {
        &self.hooks
    }

    /// The namespace registry, for process-scoped source access (e.g.
    /// background jobs issuing queries outside a request).
    pub fn registry(&self) -> Arc<NamespaceRegistry> {
        Arc::clone(&self.registry)
    }

    /// Controller for startup/shutdown of the registered sources.
    pub fn controller(&self) -> LifecycleController {
        LifecycleController::new(Arc::clone(&self.registry))
    }
}
