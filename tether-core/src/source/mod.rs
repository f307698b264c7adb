pub mod drivers;
pub mod memory;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use std::fmt::{Display, Formatter};

/// A database endpoint as seen by this crate: a factory for per-request
/// handles plus startup/shutdown lifecycle operations.
///
/// The actual driver/pool lives behind this trait. Implementations must be
/// safe for concurrent handle creation; handles themselves are single-use
/// and never shared across requests.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    /// Bring the source up. Called once, before any handle is created.
    async fn initialize(&self) -> anyhow::Result<()>;

    /// Tear the source down. Called once, after the server stops accepting
    /// requests. No handle may be created afterwards.
    async fn destroy(&self) -> anyhow::Result<()>;

    /// Create a fresh, not-yet-connected handle.
    fn create_handle(&self) -> anyhow::Result<Box<dyn SourceHandle>>;
}

/// A single-use resource obtained from a [`ConnectionSource`], scoped to
/// exactly one request.
#[async_trait]
pub trait SourceHandle: Send + Sync {
    /// Establish the handle's connection. Called once, on request entry.
    async fn connect(&mut self) -> anyhow::Result<()>;

    /// Give the handle back to the source. Called once, on the request's
    /// first terminal event.
    async fn release(&mut self) -> anyhow::Result<()>;

    /// Run a raw statement through the handle.
    async fn execute(&mut self, statement: &str) -> anyhow::Result<()>;
}

/// Lifecycle state of a registered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    Uninitialized,
    Initialized,
    Destroyed,
}

impl Display for SourceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceState::Uninitialized => "uninitialized",
            SourceState::Initialized => "initialized",
            SourceState::Destroyed => "destroyed",
        };
        f.write_str(s)
    }
}
