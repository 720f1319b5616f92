//! Microservice resource — listing, detail, and load-balance updates.

pub mod client;
pub mod wire;

pub use client::MicroServices;
pub use wire::*;
