//! # Session Store
//!
//! Owns the authentication lifecycle and user identity for the running app
//! instance. Two states: anonymous and authenticated. The only way in is a
//! successful [`SessionStore::login`]; the way out is [`SessionStore::logout`]
//! or an unrecoverable token refresh (the gateway calls `logout` itself in
//! that case).
//!
//! The in-memory copy is the single source of truth while the process runs;
//! persistence exists so the session survives restarts. Persistence failures
//! are logged and swallowed.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::User;

use crate::storage::{keys, Storage};

/// In-memory session state.
///
/// Invariant: `authorized` implies both `token` and `user` are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub authorized: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    pub refresh_code: Option<String>,
}

/// Storage-backed session store; share via `Arc`.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    inner: RwLock<Session>,
}

impl SessionStore {
    /// Create an anonymous store. Call [`hydrate`](Self::hydrate) to restore
    /// a persisted session.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            inner: RwLock::new(Session::default()),
        }
    }

    /// Restore the session from persistence. No network call.
    ///
    /// A persisted user record that is missing or does not parse leaves the
    /// session unauthenticated rather than fabricating a default user; the
    /// condition is logged so real corruption stays visible, and the
    /// orphaned credentials are removed so the warning fires once rather
    /// than on every launch.
    pub fn hydrate(&self) {
        let token = self.read_key(keys::TOKEN);
        let refresh_code = self.read_key(keys::CODE);
        let user: Option<User> = self
            .read_key(keys::CURRENT_USER)
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(error = %err, "persisted user record is unreadable");
                    None
                }
            });

        let authorized = token.is_some() && user.is_some();

        if token.is_some() && !authorized {
            tracing::warn!("token persisted without a readable user; treating session as anonymous");
            for key in [keys::TOKEN, keys::CODE, keys::CURRENT_USER] {
                if let Err(err) = self.storage.remove(key) {
                    tracing::warn!(key, error = %err, "failed to remove orphaned session key");
                }
            }
        }

        *self.inner.write() = Session {
            authorized,
            user,
            token: token.filter(|_| authorized),
            refresh_code: refresh_code.filter(|_| authorized),
        };

        tracing::debug!(authorized, "session hydrated");
    }

    /// Store credentials and profile, then mark the session authenticated.
    pub fn login(&self, user: User, token: &str, refresh_code: &str) {
        self.write_key(keys::TOKEN, token);
        self.write_key(keys::CODE, refresh_code);
        match serde_json::to_string(&user) {
            Ok(json) => self.write_key(keys::CURRENT_USER, &json),
            Err(err) => tracing::warn!(error = %err, "failed to serialize user for persistence"),
        }

        *self.inner.write() = Session {
            authorized: true,
            user: Some(user),
            token: Some(token.to_string()),
            refresh_code: Some(refresh_code.to_string()),
        };
    }

    /// Clear the persisted key space and reset to anonymous. Idempotent.
    pub fn logout(&self) {
        if let Err(err) = self.storage.clear() {
            tracing::warn!(error = %err, "failed to clear persisted session");
        }
        *self.inner.write() = Session::default();
    }

    /// Replace the token and refresh code after a silent refresh.
    ///
    /// Leaves `user` and the authenticated state untouched; only the gateway
    /// calls this.
    pub(crate) fn refresh(&self, token: &str, refresh_code: &str) {
        self.write_key(keys::TOKEN, token);
        self.write_key(keys::CODE, refresh_code);

        let mut session = self.inner.write();
        session.token = Some(token.to_string());
        session.refresh_code = Some(refresh_code.to_string());
    }

    pub fn is_authorized(&self) -> bool {
        self.inner.read().authorized
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn refresh_code(&self) -> Option<String> {
        self.inner.read().refresh_code.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.inner.read().user.as_ref().map(|user| user.id)
    }

    /// Snapshot of the full session state.
    pub fn session(&self) -> Session {
        self.inner.read().clone()
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read persisted session key");
                None
            }
        }
    }

    fn write_key(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            tracing::warn!(key, error = %err, "failed to persist session key");
        }
    }
}
