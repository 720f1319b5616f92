//! Service resource — create, read, update, delete, batch control,
//! redeploy/rollback actions, and statistics.

pub mod client;
pub mod wire;

pub use client::Services;
pub use wire::*;
