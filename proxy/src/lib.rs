pub mod client;
pub mod delete;
pub mod deploy;
pub mod describe;
pub mod function_store;
pub mod invoke;
pub mod list;
pub mod namespace;
pub mod proxy;
pub mod update;
pub mod utils;

pub use client::{Client, ClientAuth, NoAuth};
pub use invoke::{ContentMode, InvokeBody, InvokeResponse};
