pub mod error;


pub use error::LifecycleError;

use crate::hooks::PipelineHook;
use crate::registry::NamespaceRegistry;
use async_trait::async_trait;
use std::sync::Arc;

/// Drives source initialization at server startup and teardown at
/// shutdown, in registration order.
pub struct LifecycleController {
    registry: Arc<NamespaceRegistry>,
}

impl LifecycleController {
    pub fn new(registry: Arc<NamespaceRegistry>) -> Self {
        Self { registry }
    }

    /// Initialize every registered source, in registration order.
    ///
    /// The first failure is fatal and propagates; the server must not
    /// begin serving requests with an uninitialized source.
    pub async fn startup(&self) -> Result<(), LifecycleError> {
        for entry in self.registry.entries() {
            entry.source().initialize().await.map_err(|source| {
                LifecycleError::Initialization {
                    namespace: entry.namespace().clone(),
                    source,
                }
            })?;

            entry.mark_initialized();
            tracing::info!(namespace = %entry.namespace(), "source initialized");
        }
        Ok(())
    }

    /// Destroy every registered source, at most once each, in registration
    /// order.
    ///
    /// Best-effort: a failing teardown is reported and the remaining
    /// sources are still destroyed. Must run after the server has stopped
    /// accepting requests; entries are marked destroyed first, so a late
    /// acquisition fails instead of hitting a torn-down source.
    pub async fn shutdown(&self) -> Vec<LifecycleError> {
        let mut failures = Vec::new();

        for entry in self.registry.entries() {
            if !entry.begin_destroy() {
                continue;
            }

            match entry.source().destroy().await {
                Ok(()) => {
                    tracing::info!(namespace = %entry.namespace(), "source destroyed");
                }
                Err(source) => {
                    tracing::warn!(
                        namespace = %entry.namespace(),
                        error = %source,
                        "source teardown failed; continuing shutdown",
                    );
                    failures.push(LifecycleError::Teardown {
                        namespace: entry.namespace().clone(),
                        source,
                    });
                }
            }
        }

        failures
    }
}

/// Lets hosts that only speak the pipeline interface drive teardown via
/// the close phase.
#[async_trait]
impl PipelineHook for LifecycleController {
    async fn on_close(&self) {
        self.shutdown().await;
    }
}
