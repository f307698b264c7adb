pub mod binder;
pub mod conf;
pub mod ctx;
pub mod hooks;
pub mod lifecycle;
pub mod plugin;
pub mod registry;
pub mod source;
