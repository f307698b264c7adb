use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tether_core::source::{ConnectionSource, SourceHandle};

/// Where a [`ScriptedSource`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailPoint {
    #[default]
    None,
    Initialize,
    CreateHandle,
    Connect,
    Release,
    Destroy,
}

/// Ordered record of everything the sources under test did.
///
/// Shared between sources so cross-source ordering (e.g. destroy after the
/// last release) can be asserted.
#[derive(Debug, Default)]
pub struct Journal(Mutex<Vec<String>>);

impl Journal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn record(&self, source: &str, event: &str) {
        tracing::debug!(source, event, "scripted source event");
        self.0.lock().unwrap().push(format!("{source}:{event}"));
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Number of recorded events with the given suffix, e.g. `":release"`.
    pub fn count(&self, suffix: &str) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.ends_with(suffix))
            .count()
    }

    /// Index of the first occurrence of an exact event.
    pub fn position(&self, event: &str) -> Option<usize> {
        self.0.lock().unwrap().iter().position(|e| e == event)
    }

    /// Index of the last occurrence of any event with the given suffix.
    pub fn last_position(&self, suffix: &str) -> Option<usize> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .rposition(|e| e.ends_with(suffix))
    }
}

/// Test source that journals lifecycle traffic and fails on demand.
pub struct ScriptedSource {
    name: String,
    fail: FailPoint,
    journal: Arc<Journal>,
}

impl ScriptedSource {
    pub fn new(name: &str, journal: Arc<Journal>) -> Arc<Self> {
        Self::failing(name, FailPoint::None, journal)
    }

    pub fn failing(name: &str, fail: FailPoint, journal: Arc<Journal>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            fail,
            journal,
        })
    }

    pub fn connects(&self) -> usize {
        self.journal.count(&format!("{}:connect", self.name))
    }

    pub fn releases(&self) -> usize {
        self.journal.count(&format!("{}:release", self.name))
    }
}

#[async_trait]
impl ConnectionSource for ScriptedSource {
    async fn initialize(&self) -> anyhow::Result<()> {
        if self.fail == FailPoint::Initialize {
            anyhow::bail!("scripted initialize failure for '{}'", self.name);
        }
        self.journal.record(&self.name, "initialize");
        Ok(())
    }

    async fn destroy(&self) -> anyhow::Result<()> {
        if self.fail == FailPoint::Destroy {
            anyhow::bail!("scripted destroy failure for '{}'", self.name);
        }
        self.journal.record(&self.name, "destroy");
        Ok(())
    }

    fn create_handle(&self) -> anyhow::Result<Box<dyn SourceHandle>> {
        if self.fail == FailPoint::CreateHandle {
            anyhow::bail!("scripted create failure for '{}'", self.name);
        }
        self.journal.record(&self.name, "create");
        Ok(Box::new(ScriptedHandle {
            name: self.name.clone(),
            fail: self.fail,
            journal: Arc::clone(&self.journal),
        }))
    }
}

struct ScriptedHandle {
    name: String,
    fail: FailPoint,
    journal: Arc<Journal>,
}

#[async_trait]
impl SourceHandle for ScriptedHandle {
    async fn connect(&mut self) -> anyhow::Result<()> {
        if self.fail == FailPoint::Connect {
            anyhow::bail!("scripted connect failure for '{}'", self.name);
        }
        self.journal.record(&self.name, "connect");
        Ok(())
    }

    async fn release(&mut self) -> anyhow::Result<()> {
        self.journal.record(&self.name, "release");
        if self.fail == FailPoint::Release {
            anyhow::bail!("scripted release failure for '{}'", self.name);
        }
        Ok(())
    }

    async fn execute(&mut self, statement: &str) -> anyhow::Result<()> {
        self.journal
            .record(&self.name, &format!("execute {statement}"));
        Ok(())
    }
}
