//! # Application Services
//!
//! The stores and gateway wired together, constructed once at process start
//! and passed explicitly to any screen that needs them. High-level flows
//! that span more than one component (login, logout, checkout) live here so
//! screens stay thin.

use std::sync::Arc;

use shared::{AuthRequest, CalculateResponse, CreateOrderRequest, User};

use crate::cart::CartStore;
use crate::config::ApiConfig;
use crate::core::error::{ApiError, Result};
use crate::services::api::{self, ApiClient, HttpTransport};
use crate::session::SessionStore;
use crate::storage::Storage;

/// The client core's dependency bundle.
pub struct AppServices {
    pub session: Arc<SessionStore>,
    pub cart: Arc<CartStore>,
    pub api: ApiClient,
}

impl AppServices {
    /// Build the stores over `storage`, hydrate them, and wire the gateway.
    pub fn new(config: &ApiConfig, storage: Arc<dyn Storage>) -> Self {
        let session = Arc::new(SessionStore::new(storage.clone()));
        session.hydrate();

        let cart = Arc::new(CartStore::new(storage));
        cart.hydrate();

        let api = ApiClient::new(config, session.clone());

        Self { session, cart, api }
    }

    /// Like [`new`](Self::new), but over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, storage: Arc<dyn Storage>) -> Self {
        let session = Arc::new(SessionStore::new(storage.clone()));
        session.hydrate();

        let cart = Arc::new(CartStore::new(storage));
        cart.hydrate();

        let api = ApiClient::with_transport(transport, session.clone());

        Self { session, cart, api }
    }

    /// Authenticate and persist the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let request = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = api::auth::login(&self.api, &request).await?;
        self.session
            .login(response.user.clone(), &response.token, &response.code);
        Ok(response.user)
    }

    /// End the session: best-effort server-side revocation, then local
    /// teardown. The local session and cart are cleared even when the
    /// backend call fails.
    pub async fn logout(&self) {
        if let Some(code) = self.session.refresh_code() {
            if let Err(err) = api::auth::logout(&self.api, &code).await {
                tracing::warn!(error = %err, "backend logout failed, clearing local session anyway");
            }
        }
        self.session.logout();
        self.cart.clear();
    }

    /// Price the current cart server-side.
    pub async fn calculate_cart(&self) -> Result<CalculateResponse> {
        api::order::calculate(&self.api, &self.cart.items()).await
    }

    /// Submit the current cart as an order; the cart is cleared on success.
    pub async fn place_order(&self) -> Result<()> {
        let details = self.cart.items();
        if details.is_empty() {
            return Err(ApiError::Validation("Cart is empty.".to_string()));
        }

        api::order::create(&self.api, &CreateOrderRequest { details }).await?;
        self.cart.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout;
    use crate::services::api::client::testing::{envelope_ok, MockTransport};
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn user_json() -> serde_json::Value {
        json!({
            "id": 42,
            "name": "Budi Santoso",
            "username": "budi",
            "roleId": 2,
            "positionId": 3,
            "roleName": "Cashier",
            "positionName": "Staff",
        })
    }

    #[tokio::test]
    async fn login_persists_session_across_restart() {
        let storage = Arc::new(MemoryStorage::new());
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(
            200,
            envelope_ok(json!({
                "code": "refresh-1",
                "token": "tok-1",
                "user": user_json(),
            })),
        );

        let services = AppServices::with_transport(transport, storage.clone());
        let user = services.login("budi", "secret").await.unwrap();
        assert_eq!(user.id, 42);
        assert!(services.session.is_authorized());

        // Restart: fresh services over the same storage.
        let restarted =
            AppServices::with_transport(Arc::new(MockTransport::new()), storage);
        assert!(restarted.session.is_authorized());
        assert_eq!(restarted.session.user_id(), Some(42));
    }

    #[tokio::test]
    async fn logout_clears_session_and_cart() {
        let storage = Arc::new(MemoryStorage::new());
        let transport = Arc::new(MockTransport::new());
        transport.push_reply(
            200,
            envelope_ok(json!({
                "code": "refresh-1",
                "token": "tok-1",
                "user": user_json(),
            })),
        );
        transport.push_reply(200, envelope_ok(json!(null))); // logout

        let services = AppServices::with_transport(transport, storage);
        services.login("budi", "secret").await.unwrap();
        services.cart.add_or_increment(5);

        services.logout().await;
        assert!(!services.session.is_authorized());
        assert!(services.cart.is_empty());
    }

    #[tokio::test]
    async fn checkout_flow_clears_cart_on_success() {
        let storage = Arc::new(MemoryStorage::new());
        let transport = Arc::new(MockTransport::new());
        // calculate
        transport.push_reply(
            200,
            envelope_ok(json!({
                "grandTotal": 40000,
                "items": [{"menuName": "Nasi Goreng", "qty": 2, "total": 40000}],
            })),
        );
        // create order
        transport.push_reply(200, envelope_ok(json!(null)));

        let services = AppServices::with_transport(transport.clone(), storage);
        services.cart.add_or_increment(5);
        services.cart.set_quantity(5, 2);

        let calc = services.calculate_cart().await.unwrap();
        assert_eq!(calc.grand_total, 40000);

        let cash_tendered = 50000;
        assert!(checkout::can_confirm(cash_tendered, calc.grand_total));
        assert_eq!(checkout::change(cash_tendered, calc.grand_total), 10000);

        services.place_order().await.unwrap();
        assert!(services.cart.is_empty());

        // The order request carried the cart's line items.
        let calls = transport.calls();
        assert_eq!(calls[1].0.path, "order-details");
        assert_eq!(
            calls[1].0.body.as_ref().unwrap()["details"],
            json!([{"menuId": 5, "qty": 2}])
        );
    }

    #[tokio::test]
    async fn empty_cart_cannot_be_ordered() {
        let services = AppServices::with_transport(
            Arc::new(MockTransport::new()),
            Arc::new(MemoryStorage::new()),
        );

        let err = services.place_order().await.unwrap_err();
        assert_eq!(err, ApiError::Validation("Cart is empty.".to_string()));
    }
}
