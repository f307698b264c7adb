use crate::source::{ConnectionSource, SourceHandle};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Counters {
    created: AtomicUsize,
    connected: AtomicUsize,
    released: AtomicUsize,
    executed: AtomicUsize,
}

/// Builtin in-process source.
///
/// Handles connect and release instantly and statements are counted instead
/// of executed. Useful for wiring tests and for exercising the pipeline
/// without a real database.
#[derive(Debug)]
pub struct MemorySource {
    url: String,
    counters: Arc<Counters>,
    initialized: AtomicBool,
    destroyed: AtomicBool,
}

impl MemorySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            counters: Arc::new(Counters::default()),
            initialized: AtomicBool::new(false),
            destroyed: AtomicBool::new(false),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn handles_created(&self) -> usize {
        self.counters.created.load(Ordering::Relaxed)
    }

    pub fn handles_connected(&self) -> usize {
        self.counters.connected.load(Ordering::Relaxed)
    }

    pub fn handles_released(&self) -> usize {
        self.counters.released.load(Ordering::Relaxed)
    }

    pub fn statements_executed(&self) -> usize {
        self.counters.executed.load(Ordering::Relaxed)
    }

    /// Handles connected but not yet released.
    pub fn active_handles(&self) -> usize {
        self.handles_connected()
            .saturating_sub(self.handles_released())
    }
}

#[async_trait]
impl ConnectionSource for MemorySource {
    async fn initialize(&self) -> anyhow::Result<()> {
        if self.destroyed.load(Ordering::Acquire) {
            anyhow::bail!("memory source '{}' was destroyed", self.url);
        }
        self.initialized.store(true, Ordering::Release);
        tracing::debug!(url = %self.url, "memory source initialized");
        Ok(())
    }

    async fn destroy(&self) -> anyhow::Result<()> {
        self.destroyed.store(true, Ordering::Release);
        tracing::debug!(url = %self.url, "memory source destroyed");
        Ok(())
    }

    fn create_handle(&self) -> anyhow::Result<Box<dyn SourceHandle>> {
        if self.destroyed.load(Ordering::Acquire) {
            anyhow::bail!("memory source '{}' was destroyed", self.url);
        }
        if !self.initialized.load(Ordering::Acquire) {
            anyhow::bail!("memory source '{}' is not initialized", self.url);
        }
        self.counters.created.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(MemoryHandle {
            counters: Arc::clone(&self.counters),
            connected: false,
        }))
    }
}

struct MemoryHandle {
    counters: Arc<Counters>,
    connected: bool,
}

#[async_trait]
impl SourceHandle for MemoryHandle {
    async fn connect(&mut self) -> anyhow::Result<()> {
        self.connected = true;
        self.counters.connected.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn release(&mut self) -> anyhow::Result<()> {
        if !self.connected {
            anyhow::bail!("memory handle released before connect");
        }
        self.connected = false;
        self.counters.released.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn execute(&mut self, statement: &str) -> anyhow::Result<()> {
        if !self.connected {
            anyhow::bail!("memory handle is not connected");
        }
        self.counters.executed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(statement, "memory handle executed statement");
        Ok(())
    }
}
