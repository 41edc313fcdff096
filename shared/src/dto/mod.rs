//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the backend REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response envelope and backend error codes
//! - [`auth`] - Login, logout and token refresh
//! - [`user`] - User profile records and updates
//! - [`menu`] - Menu catalog entries
//! - [`merchant`] - Merchant listing
//! - [`role`] - Role listing
//! - [`order`] - Cart line items, calculation, orders, history, payment
//! - [`dashboard`] - Merchant dashboard stats
//! - [`paging`] - Paged list requests/responses

pub mod auth;
pub mod dashboard;
pub mod envelope;
pub mod menu;
pub mod merchant;
pub mod order;
pub mod paging;
pub mod role;
pub mod user;

pub use auth::*;
pub use dashboard::*;
pub use envelope::*;
pub use menu::*;
pub use merchant::*;
pub use order::*;
pub use paging::*;
pub use role::*;
pub use user::*;
