//! # User Endpoints

use serde_json::Value;
use shared::{FirebaseTokenRequest, UpdateUserRequest, User};

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch a user profile (GET /users/:id).
pub async fn get(client: &ApiClient, user_id: i64) -> Result<User> {
    client.get(&format!("users/{user_id}")).await
}

/// Update the current user's profile (PUT /users).
pub async fn update(client: &ApiClient, request: &UpdateUserRequest) -> Result<()> {
    let _: Value = client.put("users", request).await?;
    Ok(())
}

/// Register the device's push-notification token (PUT /users/firebase-token).
pub async fn update_firebase_token(client: &ApiClient, token: &str) -> Result<()> {
    let _: Value = client
        .put(
            "users/firebase-token",
            &FirebaseTokenRequest {
                token: token.to_string(),
            },
        )
        .await?;
    Ok(())
}
