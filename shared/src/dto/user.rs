use serde::{Deserialize, Serialize};

/// User profile as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    #[serde(rename = "roleId")]
    pub role_id: i64,
    #[serde(rename = "positionId")]
    pub position_id: i64,
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(rename = "positionName")]
    pub position_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Profile update payload (PUT /users).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Push-notification token registration (PUT /users/firebase-token).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirebaseTokenRequest {
    pub token: String,
}
