//! Configuration-item resource.
//!
//! Config values are dynamically typed against a declared kind tag; the
//! client rejects mismatched values before they reach the transport.

pub mod client;
pub mod wire;

pub use client::Configs;
pub use wire::*;
