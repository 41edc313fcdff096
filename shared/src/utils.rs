//! # Shared Utility Functions
//!
//! Helpers used by both the client core and any future admin tooling:
//! query-string rendering for paged list requests and rupiah formatting.

use crate::dto::paging::PagingQuery;

/// Render a [`PagingQuery`] as a `?key=value&...` query string.
///
/// `None` fields are omitted, matching the backend's expectation that
/// absent parameters fall back to server defaults.
///
/// # Examples
///
/// ```rust
/// use shared::dto::paging::PagingQuery;
/// use shared::utils::paging_to_query_string;
///
/// let qs = paging_to_query_string(&PagingQuery::default());
/// assert_eq!(qs, "?current=1&size=100&sortName=id&sortDir=asc");
/// ```
pub fn paging_to_query_string(query: &PagingQuery) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(keyword) = &query.keyword {
        if !keyword.is_empty() {
            parts.push(format!("keyword={}", urlencoding::encode(keyword)));
        }
    }
    parts.push(format!("current={}", query.current));
    parts.push(format!("size={}", query.size));
    if let Some(sort_name) = &query.sort_name {
        parts.push(format!("sortName={}", urlencoding::encode(sort_name)));
    }
    if let Some(sort_dir) = &query.sort_dir {
        parts.push(format!("sortDir={}", urlencoding::encode(sort_dir)));
    }
    if let Some(merchant_id) = query.merchant_id {
        parts.push(format!("merchantId={}", merchant_id));
    }

    format!("?{}", parts.join("&"))
}

/// Format an integral rupiah amount for display, e.g. `Rp 230.000`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::currency_format;
///
/// assert_eq!(currency_format(230_000), "Rp 230.000");
/// assert_eq!(currency_format(0), "Rp 0");
/// ```
pub fn currency_format(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_skips_absent_fields() {
        let query = PagingQuery {
            keyword: None,
            current: 2,
            size: 25,
            sort_name: None,
            sort_dir: None,
            merchant_id: None,
        };
        assert_eq!(paging_to_query_string(&query), "?current=2&size=25");
    }

    #[test]
    fn query_string_includes_merchant_filter() {
        let query = PagingQuery {
            merchant_id: Some(7),
            ..PagingQuery::default()
        };
        assert_eq!(
            paging_to_query_string(&query),
            "?current=1&size=100&sortName=id&sortDir=asc&merchantId=7"
        );
    }

    #[test]
    fn keyword_is_percent_encoded() {
        let query = PagingQuery {
            keyword: Some("nasi goreng".to_string()),
            sort_name: None,
            sort_dir: None,
            ..PagingQuery::default()
        };
        assert_eq!(
            paging_to_query_string(&query),
            "?keyword=nasi%20goreng&current=1&size=100"
        );
    }

    #[test]
    fn keyword_reserved_characters_cannot_split_the_query() {
        let query = PagingQuery {
            keyword: Some("ayam&size=1".to_string()),
            sort_name: None,
            sort_dir: None,
            ..PagingQuery::default()
        };
        assert_eq!(
            paging_to_query_string(&query),
            "?keyword=ayam%26size%3D1&current=1&size=100"
        );
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(currency_format(1_500), "Rp 1.500");
        assert_eq!(currency_format(40_000), "Rp 40.000");
        assert_eq!(currency_format(1_234_567), "Rp 1.234.567");
        assert_eq!(currency_format(-500), "-Rp 500");
        assert_eq!(currency_format(999), "Rp 999");
    }
}
