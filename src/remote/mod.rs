//! Remote server client module
//!
//! Blocking HTTP transport for the facts server.

mod client;

pub use client::RestClient;
