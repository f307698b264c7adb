use crate::ctx::RequestId;
use crate::hooks::HookError;
use crate::registry::{Namespace, SourceEntry};
use crate::source::{SourceHandle, SourceState};
use std::fmt::{Display, Formatter};

/// Lifecycle of a handle within one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    NotAcquired,
    Acquiring,
    Acquired,
    Released,
}

impl Display for HandleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandleState::NotAcquired => "not-acquired",
            HandleState::Acquiring => "acquiring",
            HandleState::Acquired => "acquired",
            HandleState::Released => "released",
        };
        f.write_str(s)
    }
}

/// A connected handle owned by exactly one in-flight request.
///
/// The release transition is guarded here rather than at the call sites:
/// error and send can both fire for the same request in some pipelines,
/// and only the first one may release.
pub struct BoundHandle {
    request: RequestId,
    namespace: Namespace,
    state: HandleState,
    handle: Box<dyn SourceHandle>,
}

impl BoundHandle {
    /// Acquire a connected handle from a registered source.
    ///
    /// On failure no handle exists yet, so there is nothing to release;
    /// the attempt is simply abandoned.
    pub(crate) async fn acquire(
        entry: &SourceEntry,
        request: RequestId,
    ) -> Result<Self, HookError> {
        let namespace = entry.namespace().clone();

        let state = entry.state();
        if state != SourceState::Initialized {
            return Err(HookError::Acquisition {
                namespace,
                source: anyhow::anyhow!("source is {state}"),
            });
        }

        let handle = entry
            .source()
            .create_handle()
            .map_err(|source| HookError::Acquisition {
                namespace: namespace.clone(),
                source,
            })?;

        let mut bound = Self {
            request,
            namespace,
            state: HandleState::Acquiring,
            handle,
        };

        match bound.handle.connect().await {
            Ok(()) => {
                bound.state = HandleState::Acquired;
                Ok(bound)
            }
            Err(source) => Err(HookError::Acquisition {
                namespace: bound.namespace.clone(),
                source,
            }),
        }
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The request this handle belongs to.
    pub fn request(&self) -> &RequestId {
        &self.request
    }

    /// Run a raw statement through the handle. Only valid while acquired.
    pub async fn execute(&mut self, statement: &str) -> anyhow::Result<()> {
        if self.state != HandleState::Acquired {
            anyhow::bail!("handle is {}, cannot execute", self.state);
        }
        self.handle.execute(statement).await
    }

    /// Give the handle back to its source.
    ///
    /// No-op unless the handle is currently acquired; the transition to
    /// `Released` happens before the underlying call, so even a failed
    /// release is never retried.
    pub(crate) async fn release(&mut self) -> Result<(), HookError> {
        if self.state != HandleState::Acquired {
            return Ok(());
        }
        self.state = HandleState::Released;

        self.handle
            .release()
            .await
            .map_err(|source| HookError::Release {
                namespace: self.namespace.clone(),
                source,
            })
    }
}

impl Drop for BoundHandle {
    fn drop(&mut self) {
        // Leak tripwire: every terminal pipeline phase releases, so an
        // acquired handle at drop means the host skipped them all.
        if self.state == HandleState::Acquired {
            tracing::error!(
                namespace = %self.namespace,
                request = %self.request,
                "handle dropped while acquired; no terminal pipeline phase ran",
            );
        }
    }
}

impl std::fmt::Debug for BoundHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundHandle")
            .field("request", &self.request)
            .field("namespace", &self.namespace)
            .field("state", &self.state)
            .finish()
    }
}
