//! Data models for the sandbox backend.
//!
//! Field names match the JSON consumed by the proxy and hub servers.

mod player;
mod server;

pub use player::*;
pub use server::*;
