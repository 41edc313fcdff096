//! # Dashboard Endpoints

use serde_json::Value;
use shared::{Dashboard, OpenOrderRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Merchant dashboard stats (GET /dashboards).
pub async fn get(client: &ApiClient) -> Result<Dashboard> {
    client.get("dashboards").await
}

/// Open the order window for the day (POST /dashboards).
pub async fn open_order(client: &ApiClient, request: &OpenOrderRequest) -> Result<()> {
    let _: Value = client.post("dashboards", request).await?;
    Ok(())
}
