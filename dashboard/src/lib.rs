//! Headless engine behind the OpenFaaS dashboard: keeps a polled function list in
//! sync with local selection state, proxies ad-hoc invocations and edits function
//! metadata through the gateway.

pub mod codec;
pub mod create;
pub mod dashboard;
pub mod download;
pub mod editor;
pub mod gateway;
pub mod invocation;
pub mod namespace;
pub mod notify;
pub mod registry;
pub mod session;
pub mod store;

pub use dashboard::{Dashboard, DeleteOutcome};
pub use gateway::{Gateway, StoreSource};
pub use proxy::ContentMode;
