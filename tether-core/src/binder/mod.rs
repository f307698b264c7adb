mod handle;


pub use handle::{BoundHandle, HandleState};

use crate::ctx::RequestCtx;
use crate::hooks::{HookError, PipelineHook};
use crate::registry::SourceEntry;
use async_trait::async_trait;
use std::sync::Arc;

/// Pipeline hook that scopes one source's handles to the request lifecycle.
///
/// One binder is installed per registered namespace. On request entry it
/// acquires a connected handle and attaches it to the request context; on
/// the first terminal phase it releases that handle. Release is guarded in
/// [`BoundHandle`], so a second terminal phase is a no-op.
pub struct HandleBinder {
    entry: Arc<SourceEntry>,
}

impl HandleBinder {
    pub fn new(entry: Arc<SourceEntry>) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &Arc<SourceEntry> {
        &self.entry
    }

    async fn release(&self, ctx: &mut RequestCtx) {
        // Nothing to release when acquisition never reached Acquired.
        let Some(handle) = ctx.orm.get_mut(self.entry.namespace()) else {
            return;
        };

        if let Err(err) = handle.release().await {
            // Reported on the request's error path but must not stop the
            // response from going out.
            tracing::warn!(
                namespace = %self.entry.namespace(),
                request = %ctx.id,
                error = %err,
                "handle release failed",
            );
            ctx.failures.push(err);
        }
    }
}

#[async_trait]
impl PipelineHook for HandleBinder {
    async fn on_request(&self, ctx: &mut RequestCtx) -> Result<(), HookError> {
        let handle = BoundHandle::acquire(&self.entry, ctx.id.clone()).await?;
        ctx.orm.insert(handle);
        Ok(())
    }

    async fn on_error(&self, ctx: &mut RequestCtx) {
        self.release(ctx).await;
    }

    async fn on_send(&self, ctx: &mut RequestCtx) {
        self.release(ctx).await;
    }

    async fn on_abort(&self, ctx: &mut RequestCtx) {
        self.release(ctx).await;
    }
}
