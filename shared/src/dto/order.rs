use serde::{Deserialize, Serialize};

/// Cart line item: one menu id with its quantity.
///
/// This is both the client's persisted cart entry and the wire format for
/// order calculation and creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    #[serde(rename = "menuId")]
    pub menu_id: i64,
    pub qty: i64,
}

/// Order creation request (POST /order-details).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderRequest {
    pub details: Vec<OrderItem>,
}

/// One priced line in a calculation result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculateItem {
    #[serde(rename = "menuName")]
    pub menu_name: String,
    pub qty: i64,
    pub total: i64,
}

/// Server-computed order total (POST /order-details/calculate).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculateResponse {
    #[serde(rename = "grandTotal")]
    pub grand_total: i64,
    pub items: Vec<CalculateItem>,
}

/// One order in a user's history listing (GET /orders/user/:id).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub id: i64,
    pub code: String,
    pub date: String,
    pub total: i64,
}

/// One line of a historical order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDetailLine {
    pub name: String,
    pub qty: i64,
    pub price: i64,
    pub total: i64,
}

/// Payment recorded against an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderPayment {
    #[serde(rename = "totalPayment")]
    pub total_payment: i64,
    pub cashback: i64,
}

/// Full historical order detail (GET /orders/user/:id/detail/:orderId).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDetailHistory {
    pub code: String,
    pub date: String,
    pub total: i64,
    #[serde(rename = "orderDetails")]
    pub order_details: Vec<OrderDetailLine>,
    #[serde(rename = "orderPayment")]
    pub order_payment: OrderPayment,
}

/// One of today's open orders (GET /order-details/today).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderToday {
    pub code: String,
    pub name: String,
    pub total: i64,
    pub details: Vec<OrderTodayLine>,
}

/// One line of an open order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTodayLine {
    #[serde(rename = "menuName")]
    pub menu_name: String,
    pub qty: i64,
    pub price: i64,
}

/// Payment settlement request (PUT /orders/payment).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRequest {
    #[serde(rename = "orderId")]
    pub order_id: i64,
    #[serde(rename = "totalPayment")]
    pub total_payment: i64,
}
