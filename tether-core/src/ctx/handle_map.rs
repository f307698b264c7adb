use crate::binder::BoundHandle;
use crate::registry::Namespace;
use std::collections::HashMap;

/// Per-request mapping from namespace to acquired handle.
///
/// A registry holds either the default slot or named slots, never both,
/// so the same is true here within one request.
#[derive(Debug, Default)]
pub struct HandleMap {
    default: Option<BoundHandle>,
    named: HashMap<String, BoundHandle>,
}

impl HandleMap {
    /// Attach a handle under its namespace.
    ///
    /// One binder exists per namespace and each runs once per request, so
    /// an occupied slot here is a wiring bug.
    pub(crate) fn insert(&mut self, handle: BoundHandle) {
        match handle.namespace().clone() {
            Namespace::Default => {
                debug_assert!(self.default.is_none(), "default handle slot occupied");
                self.default = Some(handle);
            }
            Namespace::Named(name) => {
                debug_assert!(
                    !self.named.contains_key(&name),
                    "handle slot '{name}' occupied"
                );
                self.named.insert(name, handle);
            }
        }
    }

    pub(crate) fn get_mut(&mut self, namespace: &Namespace) -> Option<&mut BoundHandle> {
        match namespace {
            Namespace::Default => self.default.as_mut(),
            Namespace::Named(name) => self.named.get_mut(name),
        }
    }

    /// Handle in the default slot.
    pub fn default_handle(&self) -> Option<&BoundHandle> {
        self.default.as_ref()
    }

    pub fn default_handle_mut(&mut self) -> Option<&mut BoundHandle> {
        self.default.as_mut()
    }

    /// Handle acquired under a named namespace.
    pub fn handle(&self, name: &str) -> Option<&BoundHandle> {
        self.named.get(name)
    }

    pub fn handle_mut(&mut self, name: &str) -> Option<&mut BoundHandle> {
        self.named.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.named.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
