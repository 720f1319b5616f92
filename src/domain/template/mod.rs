//! Provisioning template resource — templates and template directories
//! addressed by id or by path label.

pub mod client;
pub mod wire;

pub use client::Templates;
pub use wire::*;
