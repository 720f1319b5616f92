//! Resource families organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — serde structs matching the API's request/response bodies
//! - `client.rs` — the sub-client composing the REST request builder
//!
//! `common.rs` holds wire types shared by several families.

pub mod common;

pub mod config;
pub mod container;
pub mod micro_service;
pub mod node;
pub mod record;
pub mod service;
pub mod template;
