use crate::registry::Namespace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("source initialization failed for namespace '{namespace}'")]
    Initialization {
        namespace: Namespace,
        #[source]
        source: anyhow::Error,
    },

    #[error("source teardown failed for namespace '{namespace}'")]
    Teardown {
        namespace: Namespace,
        #[source]
        source: anyhow::Error,
    },
}
