use crate::registry::Namespace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("namespace already declared: {namespace}")]
    DuplicateNamespace { namespace: Namespace },

    #[error("default and named bindings cannot be mixed in one registry")]
    MixedNamespaceModes,

    #[error("binding needs either an existing source or a source config")]
    MissingSource,

    #[error("unknown driver '{driver}'")]
    UnknownDriver { driver: String },

    #[error("failed to build source with driver '{driver}'")]
    BuildSource {
        driver: String,
        #[source]
        source: anyhow::Error,
    },
}
