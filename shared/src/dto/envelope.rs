use serde::{Deserialize, Serialize};

/// Backend response codes surfaced inside the envelope.
///
/// The backend reports business-level failures through `code` even when the
/// HTTP status is 200, so clients must inspect it before using `data`.
pub mod codes {
    /// Session token rejected; refresh credentials are also invalid.
    pub const UNAUTHORIZED: &str = "1001";
    /// Requested entity does not exist.
    pub const NOT_FOUND: &str = "1004";
    /// Request payload failed validation.
    pub const BAD_REQUEST: &str = "4000";
    /// Catch-all backend error.
    pub const ERROR: &str = "9999";
}

/// Response envelope wrapping every backend payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Whether `code` marks this envelope as a business-level failure.
    pub fn is_error_code(&self) -> bool {
        matches!(
            self.code.as_str(),
            codes::UNAUTHORIZED | codes::NOT_FOUND | codes::BAD_REQUEST | codes::ERROR
        )
    }
}
