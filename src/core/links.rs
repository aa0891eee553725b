//! Pagination links carried in the `Link` response header
//!
//! The backend answers list requests with an RFC 8288 header such as
//!
//! ```text
//! </api/portfolios?page=1&size=20>; rel="next", </api/portfolios?page=4&size=20>; rel="last"
//! ```
//!
//! Only the zero-based `page` query parameter of each relation is kept.

use serde::{Deserialize, Serialize};

/// Header carrying the total number of records
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Header carrying the pagination links
pub const LINK_HEADER: &str = "link";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkHeaderError {
    #[error("header must not be empty")]
    Empty,
    #[error("section could not be split on \">;\": {0}")]
    MalformedSection(String),
    #[error("invalid page number: {0}")]
    InvalidPage(String),
}

/// Page numbers advertised by the backend, keyed by relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageLinks {
    pub first: Option<u32>,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: Option<u32>,
}

impl PageLinks {
    /// The "next" pagination token; `None` on the last page
    pub fn next_page(&self) -> Option<u32> {
        self.next
    }

    /// True when everything fits on one page
    pub fn is_single_page(&self) -> bool {
        self.first == self.last
    }

    fn set(&mut self, rel: &str, page: Option<u32>) {
        match rel {
            "first" => self.first = page,
            "prev" => self.prev = page,
            "next" => self.next = page,
            "last" => self.last = page,
            _ => {}
        }
    }
}

/// Parse a `Link` header into page numbers.
///
/// Entries are separated by commas, but a comma inside the URL (for example
/// `sort=id,asc`) belongs to the previous entry, so a new entry only starts
/// where the next token opens with `<`.
pub fn parse_link_header(header: &str) -> Result<PageLinks, LinkHeaderError> {
    if header.trim().is_empty() {
        return Err(LinkHeaderError::Empty);
    }

    let mut entries: Vec<String> = Vec::new();
    for part in header.split(',') {
        match entries.last_mut() {
            Some(last) if !part.trim_start().starts_with('<') => {
                last.push(',');
                last.push_str(part);
            }
            _ => entries.push(part.to_string()),
        }
    }

    let mut links = PageLinks::default();
    for entry in &entries {
        let Some((target, params)) = entry.split_once(">;") else {
            return Err(LinkHeaderError::MalformedSection(entry.trim().to_string()));
        };

        let url = target.trim().trim_start_matches('<');
        let page = page_param(url)?;
        let rel = relation(params);
        links.set(rel, page);
    }

    Ok(links)
}

fn page_param(url: &str) -> Result<Option<u32>, LinkHeaderError> {
    let Some((_, query)) = url.split_once('?') else {
        return Ok(None);
    };

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "page" {
            return value
                .parse::<u32>()
                .map(Some)
                .map_err(|_| LinkHeaderError::InvalidPage(value.to_string()));
        }
    }
    Ok(None)
}

fn relation(params: &str) -> &str {
    params
        .split(';')
        .map(str::trim)
        .find_map(|p| p.strip_prefix("rel="))
        .map(|rel| rel.trim_matches('"'))
        .unwrap_or("")
}

/// Parse the `X-Total-Count` header, treating garbage as zero
pub fn parse_total_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_relations() {
        let header = "</api/portfolios?page=1&size=20>; rel=\"next\",\
                      </api/portfolios?page=3&size=20>; rel=\"last\",\
                      </api/portfolios?page=0&size=20>; rel=\"first\"";

        let links = parse_link_header(header).unwrap();

        assert_eq!(links.next, Some(1));
        assert_eq!(links.last, Some(3));
        assert_eq!(links.first, Some(0));
        assert_eq!(links.prev, None);
        assert!(!links.is_single_page());
    }

    #[test]
    fn test_parse_with_comma_in_sort_param() {
        let header = "<http://localhost/api/portfolios?page=2&size=20&sort=id,asc>; rel=\"next\", \
                      <http://localhost/api/portfolios?page=0&size=20&sort=id,asc>; rel=\"prev\"";

        let links = parse_link_header(header).unwrap();

        assert_eq!(links.next, Some(2));
        assert_eq!(links.prev, Some(0));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let header = "</api/portfolios?page=0&size=20>; rel=\"first\", </api/portfolios?page=0&size=20>; rel=\"last\"";

        let links = parse_link_header(header).unwrap();

        assert_eq!(links.next_page(), None);
        assert!(links.is_single_page());
    }

    #[test]
    fn test_empty_header_rejected() {
        assert_eq!(parse_link_header("  "), Err(LinkHeaderError::Empty));
    }

    #[test]
    fn test_malformed_section_rejected() {
        let result = parse_link_header("</api/portfolios?page=1> rel=\"next\"");
        assert!(matches!(result, Err(LinkHeaderError::MalformedSection(_))));
    }

    #[test]
    fn test_invalid_page_rejected() {
        let result = parse_link_header("</api/portfolios?page=abc>; rel=\"next\"");
        assert_eq!(result, Err(LinkHeaderError::InvalidPage("abc".to_string())));
    }

    #[test]
    fn test_unknown_relation_ignored() {
        let links = parse_link_header("</api/portfolios?page=5>; rel=\"self\"").unwrap();
        assert_eq!(links, PageLinks::default());
    }

    #[test]
    fn test_total_count() {
        assert_eq!(parse_total_count(Some("42")), 42);
        assert_eq!(parse_total_count(Some(" 7 ")), 7);
        assert_eq!(parse_total_count(Some("n/a")), 0);
        assert_eq!(parse_total_count(None), 0);
    }
}
