//! # Menu Endpoints

use shared::utils::paging_to_query_string;
use shared::{Menu, PagingQuery, PagingResponse};

use super::client::ApiClient;
use crate::core::error::Result;

/// List menus, optionally filtered by merchant via the paging query
/// (GET /menus).
pub async fn get_menus(
    client: &ApiClient,
    query: &PagingQuery,
) -> Result<PagingResponse<Vec<Menu>>> {
    client
        .get(&format!("menus{}", paging_to_query_string(query)))
        .await
}

/// Fetch a single menu entry (GET /menus/:id).
pub async fn get_menu(client: &ApiClient, menu_id: i64) -> Result<Menu> {
    client.get(&format!("menus/{menu_id}")).await
}
