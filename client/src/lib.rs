//! # Ordering Client Core
//!
//! The logic-bearing core of the Safeplace mobile ordering app: everything
//! below the screens. The UI layer (rendering, navigation, theming) lives
//! elsewhere and calls into this crate.
//!
//! ## Module Structure
//!
//! - **[`session`]**: authentication lifecycle (token, refresh code and user
//!   profile), persisted across restarts
//! - **[`cart`]**: the locally-held order draft with merge-by-menu-id
//!   semantics, persisted on every mutation
//! - **[`services`]**: the API gateway, a single chokepoint over the backend
//!   REST API that attaches the bearer token, unwraps the response envelope
//!   and transparently refreshes an expired token once per failed request
//! - **[`checkout`]**: payment-gate arithmetic (change, confirm gating)
//! - **[`storage`]**: durable key-value storage behind a trait, with a
//!   JSON-file implementation and an in-memory one for tests
//! - **[`app`]**: [`AppServices`], the stores and gateway constructed once
//!   and passed explicitly to whoever needs them
//! - **[`config`]** / **[`logging`]** / **[`core`]**: environment
//!   configuration, tracing setup and the error taxonomy
//!
//! ## Error Handling
//!
//! All backend operations return [`core::ApiError`], which mirrors how the
//! backend reports failures: validation, not-found, authorization,
//! connectivity, or generic. Local persistence failures never surface to
//! callers; the stores log them and keep the in-memory state authoritative.
//!
//! ## Concurrency
//!
//! Store state sits behind `parking_lot::RwLock` and the stores are shared
//! via `Arc`, so the same instances can be read from UI code and mutated
//! from async continuations without further coordination.

pub mod app;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod session;
pub mod storage;

// Re-export the types most callers need
pub use app::AppServices;
pub use cart::CartStore;
pub use config::ApiConfig;
pub use core::{ApiError, Result};
pub use services::api::ApiClient;
pub use session::{Session, SessionStore};
