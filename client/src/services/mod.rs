//! # External Services
//!
//! Everything that leaves the process. Currently a single module: the
//! backend REST API.

pub mod api;
