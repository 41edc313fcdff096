//! # API Client
//!
//! The HTTP gateway: request descriptors, the transport seam, envelope
//! normalization and the bounded token-refresh decorator.
//!
//! ## Request path
//!
//! Every outgoing call carries `Authorization: Bearer <token>` when a token
//! is present; callers never touch the header. Responses are unwrapped from
//! the backend envelope and business error codes are mapped onto
//! [`ApiError`] before control returns to the caller.
//!
//! ## Refresh protocol
//!
//! An HTTP 401 whose envelope does not already carry the terminal
//! unauthorized code triggers one refresh call (`POST auth/revoke` with the
//! stored user id and refresh code). On success the original request is
//! re-issued exactly once with the new token: same method, same body, only
//! the Authorization header rewritten. The retry never refreshes again, so a
//! repeatedly-invalid refresh code cannot loop. A rejected refresh
//! invalidates the session (logout) and surfaces an authorization failure.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::dto::envelope::{codes, ApiResponse};
use shared::{RefreshRequest, RefreshResponse};

use crate::config::ApiConfig;
use crate::core::error::{ApiError, Result};
use crate::session::SessionStore;

/// Everything needed to issue (and re-issue) one backend call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Raw HTTP reply before envelope normalization.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

/// Transport-level failure: the request never produced a response.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("no response received: {0}")]
    Unreachable(String),
}

/// Seam between the gateway and the HTTP stack, so tests can inject a
/// scripted transport.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> std::result::Result<RawReply, TransportError>;
}

/// Production transport over a pooled `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> std::result::Result<RawReply, TransportError> {
        let url = format!("{}/{}", self.base_url, request.path.trim_start_matches('/'));

        let mut builder = self.client.request(request.method.clone(), &url);
        if let Some(token) = bearer {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError::Unreachable(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Unreachable(err.to_string()))?;

        Ok(RawReply { status, body })
    }
}

/// HTTP gateway for the backend API.
///
/// Holds the transport and the session store it keeps current; constructed
/// once and shared by all endpoint functions.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::new(config)),
            session,
        }
    }

    /// Build a gateway over a custom transport (tests, instrumentation).
    pub fn with_transport(transport: Arc<dyn HttpTransport>, session: Arc<SessionStore>) -> Self {
        Self { transport, session }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::get(path)).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(ApiRequest::post(path, to_body(body)?)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(ApiRequest::put(path, to_body(body)?)).await
    }

    /// Issue a request, normalize the reply, and recover from a stale token
    /// with at most one refresh-and-retry.
    pub(crate) async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let bearer = self.session.token();
        let mut reply = self
            .transport
            .execute(&request, bearer.as_deref())
            .await
            .map_err(connectivity)?;

        if wants_refresh(&reply) {
            match (self.session.user_id(), self.session.refresh_code()) {
                (Some(user_id), Some(code)) => {
                    let token = self.refresh_session(user_id, code).await?;
                    tracing::debug!(path = %request.path, "retrying request with refreshed token");
                    reply = self
                        .transport
                        .execute(&request, Some(&token))
                        .await
                        .map_err(connectivity)?;
                }
                _ => {
                    // No credentials to refresh with; the 401 stands.
                    tracing::warn!(path = %request.path, "401 without refresh credentials");
                }
            }
        }

        let data = normalize(reply)?;
        serde_json::from_value(data)
            .map_err(|err| ApiError::Generic(format!("Failed to parse response: {err}")))
    }

    /// Exchange the refresh code for new credentials and store them.
    ///
    /// Any refresh reply that is not a success envelope invalidates the
    /// session. A transport failure is surfaced as connectivity instead; a
    /// network blip during refresh is not evidence the code is bad.
    async fn refresh_session(&self, user_id: i64, code: String) -> Result<String> {
        tracing::info!("access token rejected, attempting silent refresh");

        let body = to_body(&RefreshRequest { user_id, code })?;
        let request = ApiRequest::post("auth/revoke", body);

        let reply = self
            .transport
            .execute(&request, self.session.token().as_deref())
            .await
            .map_err(connectivity)?;

        let tokens: RefreshResponse = match normalize(reply)
            .and_then(|data| {
                serde_json::from_value(data)
                    .map_err(|err| ApiError::Generic(format!("Failed to parse response: {err}")))
            }) {
            Ok(tokens) => tokens,
            Err(err) => {
                tracing::warn!(error = %err, "token refresh rejected, invalidating session");
                self.session.logout();
                return Err(ApiError::Authorization("Unauthorized.".to_string()));
            }
        };

        self.session.refresh(&tokens.token, &tokens.code);
        tracing::info!("session credentials refreshed");
        Ok(tokens.token)
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::Generic(format!("Failed to encode request: {err}")))
}

fn connectivity(err: TransportError) -> ApiError {
    tracing::warn!(error = %err, "request transport failure");
    ApiError::Connectivity("No internet connection.".to_string())
}

fn parse_envelope(body: &str) -> Option<ApiResponse<Value>> {
    serde_json::from_str(body).ok()
}

/// Whether this reply should trigger the refresh protocol: an HTTP 401 whose
/// envelope does not already carry the terminal unauthorized code (which
/// means the refresh credentials themselves are dead).
fn wants_refresh(reply: &RawReply) -> bool {
    reply.status == 401
        && parse_envelope(&reply.body)
            .map(|envelope| envelope.code != codes::UNAUTHORIZED)
            .unwrap_or(true)
}

/// Map a raw reply to the unwrapped `data` payload or a classified failure.
fn normalize(reply: RawReply) -> Result<Value> {
    if reply.status == 401 {
        let message = envelope_message(&reply.body, "Unauthorized.");
        return Err(ApiError::Authorization(message));
    }
    if !(200..300).contains(&reply.status) {
        return Err(ApiError::Generic(format!(
            "Something went wrong. (HTTP {})",
            reply.status
        )));
    }

    let envelope = parse_envelope(&reply.body)
        .ok_or_else(|| ApiError::Generic("Unexpected response body.".to_string()))?;

    match envelope.code.as_str() {
        codes::UNAUTHORIZED => Err(ApiError::Authorization(message_or(
            envelope.message,
            "Unauthorized.",
        ))),
        codes::NOT_FOUND => Err(ApiError::NotFound(message_or(
            envelope.message,
            "Data not found. Please recheck your data.",
        ))),
        codes::BAD_REQUEST => Err(ApiError::Validation(message_or(
            envelope.message,
            "Bad request.",
        ))),
        codes::ERROR => Err(ApiError::Generic(message_or(
            envelope.message,
            "Something went wrong.",
        ))),
        _ => Ok(envelope.data),
    }
}

fn envelope_message(body: &str, fallback: &str) -> String {
    parse_envelope(body)
        .map(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn message_or(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport for gateway and flow tests.

    use std::collections::VecDeque;

    use parking_lot::Mutex;

    use super::*;

    /// One recorded call: the request descriptor and the bearer it carried.
    pub(crate) type RecordedCall = (ApiRequest, Option<String>);

    /// Transport that replays a queue of canned replies and records every
    /// call it receives.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        replies: Mutex<VecDeque<std::result::Result<RawReply, TransportError>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn push_reply(&self, status: u16, body: impl Into<String>) {
            self.replies.lock().push_back(Ok(RawReply {
                status,
                body: body.into(),
            }));
        }

        pub(crate) fn push_unreachable(&self) {
            self.replies
                .lock()
                .push_back(Err(TransportError::Unreachable(
                    "connection refused".to_string(),
                )));
        }

        pub(crate) fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn execute(
            &self,
            request: &ApiRequest,
            bearer: Option<&str>,
        ) -> std::result::Result<RawReply, TransportError> {
            self.calls
                .lock()
                .push((request.clone(), bearer.map(str::to_string)));
            self.replies
                .lock()
                .pop_front()
                .expect("mock transport received an unexpected request")
        }
    }

    /// Success envelope with `data`.
    pub(crate) fn envelope_ok(data: Value) -> String {
        serde_json::json!({
            "success": true,
            "code": "0000",
            "message": "",
            "data": data,
        })
        .to_string()
    }

    /// Failure envelope with a backend error code.
    pub(crate) fn envelope_err(code: &str, message: &str) -> String {
        serde_json::json!({
            "success": false,
            "code": code,
            "message": message,
            "data": null,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;
    use shared::User;

    fn test_user() -> User {
        User {
            id: 42,
            name: "Budi Santoso".to_string(),
            username: "budi".to_string(),
            role_id: 2,
            position_id: 3,
            role_name: "Cashier".to_string(),
            position_name: "Staff".to_string(),
            email: None,
            phone_number: None,
        }
    }

    fn logged_in_session() -> Arc<SessionStore> {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
        session.login(test_user(), "tok-old", "code-old");
        session
    }

    fn client_with(transport: Arc<MockTransport>, session: Arc<SessionStore>) -> ApiClient {
        ApiClient::with_transport(transport, session)
    }

    #[tokio::test]
    async fn attaches_bearer_and_unwraps_data() {
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(200, envelope_ok(json!({"id": 9})));
        let client = client_with(transport.clone(), logged_in_session());

        let data: Value = client.get("menus/9").await.unwrap();
        assert_eq!(data["id"], 9);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1.as_deref(), Some("tok-old"));
        assert_eq!(calls[0].0.path, "menus/9");
    }

    #[tokio::test]
    async fn anonymous_request_has_no_bearer() {
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(200, envelope_ok(json!(null)));
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
        let client = client_with(transport.clone(), session);

        let _: Value = client.get("menus").await.unwrap();
        assert_eq!(transport.calls()[0].1, None);
    }

    #[tokio::test]
    async fn maps_envelope_error_codes() {
        let cases = [
            ("1004", ApiError::NotFound("missing".to_string())),
            ("4000", ApiError::Validation("missing".to_string())),
            ("9999", ApiError::Generic("missing".to_string())),
        ];
        for (code, expected) in cases {
            let transport = Arc::new(MockTransport::new());
            transport.push_reply(200, envelope_err(code, "missing"));
            let client = client_with(transport, logged_in_session());

            let err = client.get::<Value>("menus").await.unwrap_err();
            assert_eq!(err, expected, "code {code}");
        }
    }

    #[tokio::test]
    async fn envelope_unauthorized_inside_success_status() {
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(200, envelope_err("1001", "Unauthorized."));
        let client = client_with(transport.clone(), logged_in_session());

        let err = client.get::<Value>("menus").await.unwrap_err();
        assert_eq!(err, ApiError::Authorization("Unauthorized.".to_string()));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn http_error_status_is_generic() {
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(500, "oops".to_string());
        let client = client_with(transport, logged_in_session());

        let err = client.get::<Value>("menus").await.unwrap_err();
        assert!(matches!(err, ApiError::Generic(_)));
    }

    #[tokio::test]
    async fn unreachable_is_connectivity() {
        let transport = Arc::new(MockTransport::new());
        transport.push_unreachable();
        let client = client_with(transport, logged_in_session());

        let err = client.get::<Value>("menus").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Connectivity("No internet connection.".to_string())
        );
    }

    #[tokio::test]
    async fn refresh_then_retry_exactly_once() {
        let transport = Arc::new(MockTransport::new());
        // Original request: stale token.
        transport.push_reply(401, envelope_err("9999", "token expired"));
        // Refresh succeeds.
        transport.push_reply(
            200,
            envelope_ok(json!({"token": "tok-new", "code": "code-new"})),
        );
        // Retried original request succeeds.
        transport.push_reply(200, envelope_ok(json!({"id": 5})));

        let session = logged_in_session();
        let client = client_with(transport.clone(), session.clone());

        let data: Value = client.get("menus/5").await.unwrap();
        assert_eq!(data["id"], 5);

        let calls = transport.calls();
        assert_eq!(calls.len(), 3);

        // Refresh call carries the stored user id and refresh code.
        assert_eq!(calls[1].0.path, "auth/revoke");
        let refresh_body = calls[1].0.body.as_ref().unwrap();
        assert_eq!(refresh_body["userId"], 42);
        assert_eq!(refresh_body["code"], "code-old");

        // Retry is the same request with only the bearer rewritten.
        assert_eq!(calls[2].0.path, "menus/5");
        assert_eq!(calls[2].1.as_deref(), Some("tok-new"));

        // New credentials are stored.
        assert_eq!(session.token(), Some("tok-new".to_string()));
        assert_eq!(session.refresh_code(), Some("code-new".to_string()));
        assert!(session.is_authorized());
    }

    #[tokio::test]
    async fn retried_401_does_not_refresh_again() {
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(401, envelope_err("9999", "token expired"));
        transport.push_reply(
            200,
            envelope_ok(json!({"token": "tok-new", "code": "code-new"})),
        );
        // The retry itself comes back 401; it must propagate, no second refresh.
        transport.push_reply(401, envelope_err("9999", "still expired"));

        let client = client_with(transport.clone(), logged_in_session());

        let err = client.get::<Value>("menus").await.unwrap_err();
        assert!(matches!(err, ApiError::Authorization(_)));
        assert_eq!(transport.calls().len(), 3);
    }

    #[tokio::test]
    async fn terminal_unauthorized_envelope_skips_refresh() {
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(401, envelope_err("1001", "Unauthorized."));
        let client = client_with(transport.clone(), logged_in_session());

        let err = client.get::<Value>("menus").await.unwrap_err();
        assert_eq!(err, ApiError::Authorization("Unauthorized.".to_string()));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn missing_refresh_credentials_surface_the_401() {
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(401, envelope_err("9999", "token expired"));

        // Anonymous session, so no user id or refresh code: guard must skip.
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
        let client = client_with(transport.clone(), session);

        let err = client.get::<Value>("menus").await.unwrap_err();
        assert!(matches!(err, ApiError::Authorization(_)));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn rejected_refresh_invalidates_session() {
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(401, envelope_err("9999", "token expired"));
        // Refresh comes back with the terminal unauthorized code.
        transport.push_reply(401, envelope_err("1001", "Unauthorized."));

        let session = logged_in_session();
        let client = client_with(transport.clone(), session.clone());

        let err = client.get::<Value>("menus").await.unwrap_err();
        assert_eq!(err, ApiError::Authorization("Unauthorized.".to_string()));
        assert!(!session.is_authorized());
        assert_eq!(transport.calls().len(), 2);
    }
}
