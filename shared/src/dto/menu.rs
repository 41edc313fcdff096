use serde::{Deserialize, Serialize};

/// Menu catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: i64,
    #[serde(rename = "merchantName")]
    pub merchant_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
