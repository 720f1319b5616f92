//! Container resource — read-only instance inventory.

pub mod client;
pub mod wire;

pub use client::Containers;
pub use wire::*;
