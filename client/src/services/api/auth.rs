//! # Authentication Endpoints
//!
//! Login and logout. Token refresh is not exposed here; the gateway runs it
//! internally when a request comes back 401.

use serde_json::Value;
use shared::{AuthRequest, AuthResponse, LogoutRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with username and password (POST /auth).
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn login(client: &ApiClient, request: &AuthRequest) -> Result<AuthResponse> {
    tracing::info!("attempting login");
    let response: AuthResponse = client.post("auth", request).await?;
    tracing::info!(user_id = response.user.id, "login successful");
    Ok(response)
}

/// Invalidate the refresh code server-side (POST /auth/logout).
pub async fn logout(client: &ApiClient, code: &str) -> Result<()> {
    let _: Value = client
        .post(
            "auth/logout",
            &LogoutRequest {
                code: code.to_string(),
            },
        )
        .await?;
    Ok(())
}
