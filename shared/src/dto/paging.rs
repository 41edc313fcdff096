use serde::{Deserialize, Serialize};

/// Paged list request, rendered into a query string by
/// [`crate::utils::paging_to_query_string`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub current: u32,
    pub size: u32,
    #[serde(rename = "sortName", skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    #[serde(rename = "sortDir", skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
    #[serde(rename = "merchantId", skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<i64>,
}

impl Default for PagingQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            current: 1,
            size: 100,
            sort_name: Some("id".to_string()),
            sort_dir: Some("asc".to_string()),
            merchant_id: None,
        }
    }
}

/// Paged list response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagingResponse<T> {
    pub total: u64,
    pub filtered: u64,
    pub size: u32,
    pub data: T,
}
