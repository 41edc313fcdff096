use serde::{Deserialize, Serialize};

/// Merchant listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Merchant {
    pub id: i64,
    pub name: String,
}
