use serde::{Deserialize, Serialize};

use super::user::User;

/// Login request (POST /auth).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Login success payload: short-lived token plus the long-lived refresh code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub code: String,
    pub token: String,
    pub user: User,
}

/// Logout request (POST /auth/logout), identified by the refresh code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutRequest {
    pub code: String,
}

/// Token refresh request (POST /auth/revoke).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub code: String,
}

/// Token refresh payload: replacement token and refresh code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub token: String,
    pub code: String,
}
