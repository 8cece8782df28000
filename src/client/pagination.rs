//! REST pagination helpers
//!
//! GitHub's REST listings take `per_page`/`page` query parameters and signal
//! the next page through the `Link` response header.

/// Page size used for REST list requests. GitHub caps `per_page` at 100;
/// using the cap minimizes round trips.
pub const DEFAULT_PER_PAGE: usize = 100;

/// Pagination parameters for REST list requests.
#[derive(Debug, Clone)]
pub struct PageParams {
    /// Number of items per page (max 100)
    pub per_page: usize,
    /// Page number (1-indexed)
    pub page: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }
}

impl PageParams {
    /// Create params with a specific page size, clamped to the API cap.
    pub fn with_per_page(per_page: usize) -> Self {
        Self {
            per_page: per_page.min(DEFAULT_PER_PAGE).max(1),
            page: 1,
        }
    }

    /// Convert to query string parameters.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

/// Extract the `rel="next"` URL from a `Link` response header.
///
/// The header looks like:
/// `<https://api.github.com/orgs/acme/repos?page=2>; rel="next", <...>; rel="last"`
///
/// Returns `None` when there is no next page.
pub fn parse_next_link(link_header: &str) -> Option<String> {
    for part in link_header.split(',') {
        let mut sections = part.split(';');
        let url = sections.next()?.trim();
        let url = url.strip_prefix('<')?.strip_suffix('>')?;

        for param in sections {
            let param = param.trim();
            if param == r#"rel="next""# || param == "rel=next" {
                return Some(url.to_string());
            }
        }
    }
    None
}
