//! Multiple namespaced sources in one process.

use integration_tests::harness::{self, Journal, ScriptedSource};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tether_core::binder::HandleState;
use tether_core::conf::{BindOptions, ConfigError, SourceConfig};
use tether_core::ctx::RequestCtx;
use tether_core::hooks::HookPipeline;
use tether_core::plugin::TetherPlugin;
use tether_core::source::memory::MemorySource;

#[tokio::test]
async fn one_request_acquires_distinct_handles_per_namespace() {
    harness::init_logging();

    let read = Arc::new(MemorySource::new("mem://read"));
    let write = Arc::new(MemorySource::new("mem://write"));

    let mut plugin = TetherPlugin::new();
    plugin
        .bind(BindOptions::with_source(read.clone()).namespace("read"))
        .unwrap();
    plugin
        .bind(BindOptions::with_source(write.clone()).namespace("write"))
        .unwrap();
    plugin.controller().startup().await.unwrap();

    let mut ctx = RequestCtx::new("GET", "/report");
    HookPipeline::run_on_request(plugin.hooks(), &mut ctx)
        .await
        .unwrap();

    {
        let read_handle = ctx.orm.handle("read").expect("read handle");
        let write_handle = ctx.orm.handle("write").expect("write handle");
        assert_eq!(read_handle.state(), HandleState::Acquired);
        assert_eq!(write_handle.state(), HandleState::Acquired);
        assert_eq!(read_handle.namespace().name(), Some("read"));
        assert_eq!(write_handle.namespace().name(), Some("write"));
    }

    // Statements go through the right source.
    ctx.orm
        .handle_mut("read")
        .unwrap()
        .execute("SELECT 1")
        .await
        .unwrap();
    assert_eq!(read.statements_executed(), 1);
    assert_eq!(write.statements_executed(), 0);

    HookPipeline::run_on_send(plugin.hooks(), &mut ctx).await;

    assert_eq!(read.handles_released(), 1);
    assert_eq!(write.handles_released(), 1);
}

#[tokio::test]
async fn duplicate_namespace_leaves_first_binding_usable() {
    harness::init_logging();

    let journal = Journal::new();
    let first = ScriptedSource::new("first", journal.clone());

    let mut plugin = TetherPlugin::new();
    plugin
        .bind(BindOptions::with_source(first.clone()).namespace("a"))
        .unwrap();

    let err = plugin
        .bind(BindOptions::from_config(SourceConfig::new("memory", "mem://second")).namespace("a"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateNamespace { .. }));

    // The first source still initializes and serves requests.
    plugin.controller().startup().await.unwrap();

    let mut ctx = RequestCtx::new("GET", "/");
    HookPipeline::run_on_request(plugin.hooks(), &mut ctx)
        .await
        .unwrap();
    HookPipeline::run_on_send(plugin.hooks(), &mut ctx).await;

    assert_eq!(first.connects(), 1);
    assert_eq!(first.releases(), 1);
}

#[tokio::test]
async fn named_sources_are_reachable_outside_requests() {
    harness::init_logging();

    let mut plugin = TetherPlugin::new();
    plugin
        .bind(BindOptions::from_config(SourceConfig::new("memory", "mem://jobs")).namespace("jobs"))
        .unwrap();
    plugin.controller().startup().await.unwrap();

    let registry = plugin.registry();
    assert!(registry.source("jobs").is_some());
    assert!(registry.source("missing").is_none());
    assert!(registry.default_source().is_none());
}

#[tokio::test]
async fn default_and_named_bindings_cannot_mix() {
    harness::init_logging();

    let mut plugin = TetherPlugin::new();
    plugin
        .bind(BindOptions::from_config(SourceConfig::new("memory", "mem://main")))
        .unwrap();

    let err = plugin
        .bind(BindOptions::from_config(SourceConfig::new("memory", "mem://read")).namespace("read"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::MixedNamespaceModes));
}
