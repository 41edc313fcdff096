//! # Core Types
//!
//! Crate-wide error taxonomy and result alias.

pub mod error;

pub use error::{ApiError, Result};
