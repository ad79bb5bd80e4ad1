//! List envelopes and the normalized [`Pagination`] descriptor.

use serde::{Deserialize, Serialize};

/// Raw paging links as returned under `paging`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PagingLinks {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Paging fields exactly as they appear in a list body. Every field is
/// optional so any well-formed body decodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPagination {
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub paging: Option<PagingLinks>,
}

impl RawPagination {
    fn is_absent(&self) -> bool {
        self.total.is_none() && self.page.is_none() && self.per_page.is_none() && self.paging.is_none()
    }
}

/// Decoded body of a list endpoint: `data` in server order plus paging.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    #[serde(flatten)]
    pub pagination: RawPagination,
}

/// Paging metadata shared by every list-returning endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total items across all pages.
    pub total: u64,
    /// Current page (1-indexed; 0 when the server omitted it).
    pub page: u32,
    pub per_page: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

impl Pagination {
    /// Number of pages implied by `total` and `per_page`; 0 if `per_page` is unknown.
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.per_page))
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// Builds a [`Pagination`] from raw paging fields.
///
/// Returns `None` when the body carried no paging fields at all. Missing
/// individual fields default to zero / `None`.
pub fn normalize(raw: &RawPagination) -> Option<Pagination> {
    if raw.is_absent() {
        return None;
    }
    let links = raw.paging.clone().unwrap_or_default();
    Some(Pagination {
        total: raw.total.unwrap_or(0),
        page: raw.page.unwrap_or(0),
        per_page: raw.per_page.unwrap_or(0),
        next: links.next,
        previous: links.previous,
        first: links.first,
        last: links.last,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> ListEnvelope<serde_json::Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn full_block_is_copied_exactly() {
        let env = envelope(
            r#"{
                "total": 57, "page": 2, "per_page": 10,
                "paging": {"next": "/me/followers?page=3", "previous": "/me/followers?page=1",
                           "first": "/me/followers?page=1", "last": "/me/followers?page=6"},
                "data": [{"n": 1}, {"n": 2}]
            }"#,
        );
        let p = normalize(&env.pagination).unwrap();
        assert_eq!(p.total, 57);
        assert_eq!(p.page, 2);
        assert_eq!(p.per_page, 10);
        assert_eq!(p.next.as_deref(), Some("/me/followers?page=3"));
        assert_eq!(p.last.as_deref(), Some("/me/followers?page=6"));
        assert_eq!(p.total_pages(), 6);
        assert!(p.has_next());
        assert!(p.has_previous());
        assert_eq!(env.data.len(), 2);
    }

    #[test]
    fn absent_block_produces_nothing() {
        let env = envelope(r#"{"data": []}"#);
        assert!(normalize(&env.pagination).is_none());
    }

    #[test]
    fn partial_block_defaults_missing_fields() {
        let env = envelope(r#"{"total": 3, "data": [1, 2, 3]}"#);
        let p = normalize(&env.pagination).unwrap();
        assert_eq!(p.total, 3);
        assert_eq!(p.page, 0);
        assert_eq!(p.per_page, 0);
        assert_eq!(p.total_pages(), 0);
        assert!(!p.has_next());
    }

    #[test]
    fn null_links_are_absent() {
        let env = envelope(
            r#"{"total": 0, "page": 1, "per_page": 25,
                "paging": {"next": null, "previous": null, "first": "/x?page=1", "last": "/x?page=1"},
                "data": []}"#,
        );
        let p = normalize(&env.pagination).unwrap();
        assert_eq!(p.total, 0);
        assert!(!p.has_next());
        assert!(!p.has_previous());
        assert_eq!(p.total_pages(), 0);
    }

    #[test]
    fn missing_data_fails() {
        let result = serde_json::from_str::<ListEnvelope<serde_json::Value>>(r#"{"total": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn data_order_is_preserved() {
        let env = envelope(r#"{"data": [3, 1, 2]}"#);
        assert_eq!(
            env.data,
            vec![serde_json::json!(3), serde_json::json!(1), serde_json::json!(2)]
        );
    }
}
