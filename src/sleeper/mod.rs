//! Sleeper API layer: wire types and HTTP helpers.

pub mod http;
pub mod types;
