use crate::registry::Namespace;
use crate::source::{ConnectionSource, SourceState};
use std::sync::{Arc, Mutex};

/// A registered source together with its lifecycle state.
///
/// State transitions are guarded here so that initialize happens at most
/// once, destroy happens at most once, and no handle is acquired outside
/// the `Initialized` window.
pub struct SourceEntry {
    namespace: Namespace,
    source: Arc<dyn ConnectionSource>,
    state: Mutex<SourceState>,
}

impl SourceEntry {
    pub(crate) fn new(namespace: Namespace, source: Arc<dyn ConnectionSource>) -> Self {
        Self {
            namespace,
            source,
            state: Mutex::new(SourceState::Uninitialized),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn source(&self) -> &Arc<dyn ConnectionSource> {
        &self.source
    }

    pub fn state(&self) -> SourceState {
        *self.state.lock().expect("source state lock poisoned")
    }

    /// Record a successful initialize. Only valid from `Uninitialized`;
    /// returns whether the transition happened.
    pub(crate) fn mark_initialized(&self) -> bool {
        let mut state = self.state.lock().expect("source state lock poisoned");
        if *state != SourceState::Uninitialized {
            return false;
        }
        *state = SourceState::Initialized;
        true
    }

    /// Claim the destroy transition. Returns true exactly once, and only
    /// for an initialized source; the caller then runs `destroy`.
    pub(crate) fn begin_destroy(&self) -> bool {
        let mut state = self.state.lock().expect("source state lock poisoned");
        if *state != SourceState::Initialized {
            return false;
        }
        *state = SourceState::Destroyed;
        true
    }
}

impl std::fmt::Debug for SourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceEntry")
            .field("namespace", &self.namespace)
            .field("state", &self.state())
            .finish()
    }
}
