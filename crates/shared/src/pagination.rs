//! Page-token pagination for list endpoints.
//!
//! The remote API uses opaque server-issued page tokens: a list response
//! carries `nextPageToken`, and an empty or absent token means the listing is
//! exhausted. Page sizes are forwarded exactly as given; any server-side
//! clamping happens behind the proxy, never here.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl PageQuery {
    pub fn new(page_size: Option<i32>, page_token: Option<String>) -> Self {
        Self {
            page_size,
            page_token,
        }
    }

    pub fn with_size(page_size: i32) -> Self {
        Self {
            page_size: Some(page_size),
            page_token: None,
        }
    }

    /// The same query advanced to the next page.
    pub fn next(&self, token: impl Into<String>) -> Self {
        Self {
            page_size: self.page_size,
            page_token: Some(token.into()),
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Token to request the following page, if the listing has more entries.
    /// The remote API signals exhaustion with an absent or empty token.
    pub fn next_token(&self) -> Option<&str> {
        match self.next_page_token.as_deref() {
            Some("") | None => None,
            token => token,
        }
    }

    pub fn has_more(&self) -> bool {
        self.next_token().is_some()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_serializes_camel_case() {
        let query = PageQuery::with_size(500);
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"pageSize":500}"#);
    }

    #[test]
    fn test_page_size_not_clamped() {
        // Sizes above the remote maximum are forwarded as-is.
        let query = PageQuery::with_size(500);
        assert_eq!(query.page_size, Some(500));
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["pageSize"], 500);
    }

    #[test]
    fn test_empty_query_serializes_empty_object() {
        let query = PageQuery::default();
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_next_keeps_page_size() {
        let query = PageQuery::with_size(25).next("tok-2");
        assert_eq!(query.page_size, Some(25));
        assert_eq!(query.page_token.as_deref(), Some("tok-2"));
    }

    #[test]
    fn test_empty_token_means_exhausted() {
        let page: Page<i32> = Page {
            items: vec![1, 2],
            next_page_token: Some(String::new()),
        };
        assert!(!page.has_more());
        assert_eq!(page.next_token(), None);

        let page: Page<i32> = Page {
            items: vec![3],
            next_page_token: Some("abc".to_string()),
        };
        assert!(page.has_more());
        assert_eq!(page.next_token(), Some("abc"));
    }
}
