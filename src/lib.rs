//! Minimal web console for issuing requests to agents behind a silo-style
//! routing proxy and inspecting the round-trip result.

pub mod api;
pub mod config;
pub mod forwarder;
pub mod logging;
pub mod models;
