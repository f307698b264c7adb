use crate::ctx::{HandleMap, RequestId};
use crate::hooks::HookError;

/// Per-request context passed through the pipeline phases.
///
/// Built fresh for every inbound request and discarded with it; never
/// visible to another request.
#[derive(Debug)]
pub struct RequestCtx {
    pub id: RequestId,

    /// HTTP method, kept for logging.
    pub method: String,

    /// Request path, kept for logging.
    pub path: String,

    /// Handles acquired for this request, keyed by namespace.
    pub orm: HandleMap,

    /// Hook failures that were absorbed instead of aborting the request,
    /// such as a release that failed on a terminal phase.
    pub failures: Vec<HookError>,
}

impl RequestCtx {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: RequestId::default(),
            method: method.into(),
            path: path.into(),
            orm: HandleMap::default(),
            failures: Vec::new(),
        }
    }
}
