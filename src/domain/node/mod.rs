//! Node resource — read-only cluster node inventory.

pub mod client;
pub mod wire;

pub use client::Nodes;
pub use wire::*;
