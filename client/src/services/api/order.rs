//! # Order Endpoints
//!
//! Price calculation, order creation, history and payment settlement.

use serde_json::Value;
use shared::{
    CalculateResponse, CreateOrderRequest, OrderDetailHistory, OrderItem, OrderSummary,
    OrderToday, PaymentRequest,
};

use super::client::ApiClient;
use crate::core::error::Result;

/// Price the given line items server-side (POST /order-details/calculate).
///
/// Pure projection of the cart: no order is created.
pub async fn calculate(client: &ApiClient, items: &[OrderItem]) -> Result<CalculateResponse> {
    client.post("order-details/calculate", &items).await
}

/// Submit an order (POST /order-details).
#[tracing::instrument(skip(client, request), fields(lines = request.details.len()))]
pub async fn create(client: &ApiClient, request: &CreateOrderRequest) -> Result<()> {
    tracing::info!("submitting order");
    let _: Value = client.post("order-details", request).await?;
    tracing::info!("order submitted");
    Ok(())
}

/// Today's open orders (GET /order-details/today).
pub async fn today(client: &ApiClient) -> Result<Vec<OrderToday>> {
    client.get("order-details/today").await
}

/// Order history for a user (GET /orders/user/:id).
pub async fn my_orders(client: &ApiClient, user_id: i64) -> Result<Vec<OrderSummary>> {
    client.get(&format!("orders/user/{user_id}")).await
}

/// Full detail of one historical order
/// (GET /orders/user/:id/detail/:orderId).
pub async fn detail(
    client: &ApiClient,
    user_id: i64,
    order_id: i64,
) -> Result<OrderDetailHistory> {
    client
        .get(&format!("orders/user/{user_id}/detail/{order_id}"))
        .await
}

/// Record a payment against an order (PUT /orders/payment).
pub async fn update_payment(client: &ApiClient, request: &PaymentRequest) -> Result<()> {
    let _: Value = client.put("orders/payment", request).await?;
    Ok(())
}
