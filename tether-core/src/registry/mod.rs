mod entry;
mod namespace;


pub use entry::SourceEntry;
pub use namespace::Namespace;

use crate::conf::error::ConfigError;
use crate::source::ConnectionSource;
use dashmap::DashMap;
use std::sync::{Arc, Mutex};

/// Process-wide table mapping namespaces to their sources.
///
/// Written once while the plugin is configured, read-only during request
/// processing. There is no removal; slots live until teardown.
#[derive(Default)]
pub struct NamespaceRegistry {
    slots: DashMap<Namespace, Arc<SourceEntry>>,
    // Startup and shutdown run in registration order, which DashMap does
    // not preserve. Also serializes registration itself.
    order: Mutex<Vec<Namespace>>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source under a namespace slot.
    ///
    /// Fails if the slot is occupied, or if the registration would mix the
    /// default slot with named slots. An existing registration is never
    /// overwritten.
    pub fn register(
        &self,
        namespace: Namespace,
        source: Arc<dyn ConnectionSource>,
    ) -> Result<Arc<SourceEntry>, ConfigError> {
        let mut order = self.order.lock().expect("registry order lock poisoned");

        if let Some(first) = order.first()
            && first.is_default() != namespace.is_default()
        {
            return Err(ConfigError::MixedNamespaceModes);
        }

        if self.slots.contains_key(&namespace) {
            return Err(ConfigError::DuplicateNamespace { namespace });
        }

        let entry = Arc::new(SourceEntry::new(namespace.clone(), source));
        self.slots.insert(namespace.clone(), Arc::clone(&entry));
        order.push(namespace);

        Ok(entry)
    }

    pub fn lookup(&self, namespace: &Namespace) -> Option<Arc<SourceEntry>> {
        self.slots.get(namespace).map(|e| Arc::clone(&e))
    }

    /// Source registered under a named slot, for use outside the per-request
    /// handle (background jobs and the like).
    pub fn source(&self, name: &str) -> Option<Arc<dyn ConnectionSource>> {
        self.lookup(&Namespace::Named(name.to_string()))
            .map(|e| Arc::clone(e.source()))
    }

    /// Source registered under the default slot.
    pub fn default_source(&self) -> Option<Arc<dyn ConnectionSource>> {
        self.lookup(&Namespace::Default)
            .map(|e| Arc::clone(e.source()))
    }

    /// All entries, in registration order.
    pub fn entries(&self) -> Vec<Arc<SourceEntry>> {
        let order = self.order.lock().expect("registry order lock poisoned");
        order
            .iter()
            .filter_map(|ns| self.lookup(ns))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
