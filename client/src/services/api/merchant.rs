//! # Merchant Endpoints

use shared::utils::paging_to_query_string;
use shared::{Merchant, PagingQuery, PagingResponse};

use super::client::ApiClient;
use crate::core::error::Result;

/// List merchants (GET /merchants).
pub async fn get_merchants(
    client: &ApiClient,
    query: &PagingQuery,
) -> Result<PagingResponse<Vec<Merchant>>> {
    client
        .get(&format!("merchants{}", paging_to_query_string(query)))
        .await
}
