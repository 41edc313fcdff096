use serde::{Deserialize, Serialize};

/// Merchant dashboard stats (GET /dashboards).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dashboard {
    #[serde(rename = "totalOrders")]
    pub total_orders: i64,
    #[serde(rename = "totalMenus")]
    pub total_menus: i64,
    #[serde(rename = "totalMerchants")]
    pub total_merchants: i64,
    #[serde(rename = "totalPayments")]
    pub total_payments: i64,
}

/// Opens the order window for the day (POST /dashboards).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenOrderRequest {
    #[serde(rename = "userId")]
    pub user_id: i64,
}
