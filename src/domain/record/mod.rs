//! Deployment record resource — per-service deployment history.

pub mod client;
pub mod wire;

pub use client::Records;
pub use wire::*;
