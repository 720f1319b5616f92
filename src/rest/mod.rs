//! Generic REST layer — verb/resource/param request builder and typed
//! response decoding. Every resource client composes on top of this.

pub mod client;
pub mod request;
pub mod response;

pub use client::RestClient;
pub use request::{Request, Verb};
pub use response::Response;
