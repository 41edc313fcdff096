//! # Role Endpoints

use shared::utils::paging_to_query_string;
use shared::{PagingQuery, PagingResponse, Role};

use super::client::ApiClient;
use crate::core::error::Result;

/// List roles (GET /roles).
pub async fn get_roles(
    client: &ApiClient,
    query: &PagingQuery,
) -> Result<PagingResponse<Vec<Role>>> {
    client
        .get(&format!("roles{}", paging_to_query_string(query)))
        .await
}
