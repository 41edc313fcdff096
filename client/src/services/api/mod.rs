//! # Backend API Gateway
//!
//! Single chokepoint for all backend communication. The gateway attaches the
//! bearer token, unwraps the `{success, code, message, data}` envelope,
//! classifies backend error codes, and on an authentication failure performs
//! exactly one transparent token-refresh-and-retry cycle.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient, transport seam, envelope normalization, refresh
//! ├── auth.rs      - Login / logout endpoints
//! ├── menu.rs      - Menu catalog endpoints
//! ├── merchant.rs  - Merchant listing endpoint
//! ├── order.rs     - Calculation, order creation, history, payment
//! ├── role.rs      - Role listing endpoint
//! ├── user.rs      - Profile endpoints
//! └── dashboard.rs - Merchant dashboard endpoints
//! ```

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod menu;
pub mod merchant;
pub mod order;
pub mod role;
pub mod user;

pub use client::{ApiClient, ApiRequest, HttpTransport, RawReply, ReqwestTransport, TransportError};
