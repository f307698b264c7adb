use crate::registry::Namespace;
use thiserror::Error;

/// Per-request failures surfaced by pipeline hooks.
///
/// These are isolated to one request; they never touch the registry or
/// other in-flight requests.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("handle acquisition failed for namespace '{namespace}'")]
    Acquisition {
        namespace: Namespace,
        #[source]
        source: anyhow::Error,
    },

    #[error("handle release failed for namespace '{namespace}'")]
    Release {
        namespace: Namespace,
        #[source]
        source: anyhow::Error,
    },
}

impl HookError {
    pub fn namespace(&self) -> &Namespace {
        match self {
            HookError::Acquisition { namespace, .. } => namespace,
            HookError::Release { namespace, .. } => namespace,
        }
    }
}
