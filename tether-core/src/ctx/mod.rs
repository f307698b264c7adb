mod handle_map;
mod request_ctx;
mod request_id;

pub use handle_map::HandleMap;
pub use request_ctx::RequestCtx;
pub use request_id::RequestId;
