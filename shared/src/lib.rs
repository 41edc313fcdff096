//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the ordering client and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: the `{success, code, message, data}` response wrapper
//!   - **[`dto::auth`]**: authentication and token-refresh DTOs
//!   - **[`dto::user`]**: user profile DTOs
//!   - **[`dto::menu`]** / **[`dto::merchant`]** / **[`dto::role`]**:
//!     catalog and listing DTOs
//!   - **[`dto::order`]**: cart line items, calculation, order history and payment
//!   - **[`dto::dashboard`]**: merchant dashboard stats
//!   - **[`dto::paging`]**: list pagination
//! - **[`utils`]**: shared helpers (query-string building, currency formatting)
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON; Rust fields are snake_case with an
//! explicit `#[serde(rename = "...")]` wherever the two differ. Optional
//! fields are omitted from JSON when `None`.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
