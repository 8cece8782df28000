//! GraphQL request/response envelope and cursor pagination types
//!
//! The packages and codespaces reports walk GraphQL connections by following
//! `endCursor` while `hasNextPage` is true, one request at a time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GraphQL request body.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    /// The query document
    pub query: &'a str,
    /// Query variables
    pub variables: Value,
}

/// A GraphQL response envelope.
///
/// GitHub returns HTTP 200 for query-level failures, so `errors` must be
/// checked before trusting `data`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    /// The response data, absent on total failure
    pub data: Option<T>,

    /// Query-level errors
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single GraphQL error entry.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    /// Human-readable error message
    pub message: String,
}

/// Connection page info for cursor pagination.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page follows this one
    pub has_next_page: bool,

    /// Cursor to pass as `after` for the next page
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// The cursor for the next request, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_next_page {
            self.end_cursor.as_deref()
        } else {
            None
        }
    }
}
