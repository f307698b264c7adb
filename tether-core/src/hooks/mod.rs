pub mod error;

pub use error::HookError;

use crate::ctx::RequestCtx;
use async_trait::async_trait;
use std::sync::Arc;

/// A participant in the request pipeline.
///
/// The host server drives these phases for every request it handles. All
/// methods default to no-ops so implementations override only the phases
/// they care about.
///
/// Terminal phases: exactly one of `on_error`, `on_send` or `on_abort` is
/// expected per request, but implementations must tolerate more than one
/// firing (some pipelines fire both error and send).
#[async_trait]
pub trait PipelineHook: Send + Sync {
    /// Called on request entry, before any handler code runs.
    ///
    /// A failure here aborts the request; the host must still drive the
    /// error phase so earlier hooks can clean up.
    async fn on_request(&self, _ctx: &mut RequestCtx) -> Result<(), HookError> {
        Ok(())
    }

    /// Called when request processing fails.
    async fn on_error(&self, _ctx: &mut RequestCtx) {}

    /// Called when the response is about to be sent.
    async fn on_send(&self, _ctx: &mut RequestCtx) {}

    /// Called when the request is cancelled before reaching error or send.
    async fn on_abort(&self, _ctx: &mut RequestCtx) {}

    /// Called once, after the server stops accepting requests.
    async fn on_close(&self) {}
}

/// Phase runners over an installed hook list.
pub struct HookPipeline;

impl HookPipeline {
    /// Entry phase. Stops at the first failing hook and returns its error;
    /// hooks after it never see the request.
    pub async fn run_on_request(
        hooks: &[Arc<dyn PipelineHook>],
        ctx: &mut RequestCtx,
    ) -> Result<(), HookError> {
        for hook in hooks {
            hook.on_request(ctx).await?;
        }
        Ok(())
    }

    /// Error phase. Every hook runs; cleanup in one namespace must not be
    /// skipped because another failed.
    pub async fn run_on_error(hooks: &[Arc<dyn PipelineHook>], ctx: &mut RequestCtx) {
        for hook in hooks {
            hook.on_error(ctx).await;
        }
    }

    /// Send phase. Every hook runs.
    pub async fn run_on_send(hooks: &[Arc<dyn PipelineHook>], ctx: &mut RequestCtx) {
        for hook in hooks {
            hook.on_send(ctx).await;
        }
    }

    /// Abort phase, for requests cancelled mid-flight. Every hook runs.
    pub async fn run_on_abort(hooks: &[Arc<dyn PipelineHook>], ctx: &mut RequestCtx) {
        for hook in hooks {
            hook.on_abort(ctx).await;
        }
    }

    /// Shutdown phase, driven once by the host after it stops accepting
    /// requests.
    pub async fn run_on_close(hooks: &[Arc<dyn PipelineHook>]) {
        for hook in hooks {
            hook.on_close().await;
        }
    }
}
