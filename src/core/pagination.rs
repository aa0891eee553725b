//! List view pagination and sorting
//!
//! `PaginationState` is the state machine behind the portfolio table. Every
//! transition mutates the state first and then hands back the `ListRequest`
//! built from the freshly committed values, so a fetch can never carry a sort
//! from before the click that triggered it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::links::PageLinks;

/// Default page size of the portfolio table
pub const ITEMS_PER_PAGE: u32 = 20;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// Sortable portfolio columns, named as the backend expects them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Id,
    ProjectName,
    Description,
    ImageUrl,
    Link,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::ProjectName,
        SortField::Description,
        SortField::ImageUrl,
        SortField::Link,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::ProjectName => "projectName",
            SortField::Description => "description",
            SortField::ImageUrl => "imageUrl",
            SortField::Link => "link",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::ProjectName => "Project Name",
            SortField::Description => "Description",
            SortField::ImageUrl => "Image Url",
            SortField::Link => "Link",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| format!("unknown sort field '{}'", s))
    }
}

/// Icon state of a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// Query parameters of `GET /api/portfolios`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Zero-based page index
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// `"<field>,<order>"`
    pub sort: Option<String>,
}

impl ListQuery {
    /// Parameters in request order, skipping the unset ones
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }

    /// Parameters rendered as a query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// How a fetched page is merged into the loaded entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Clear the list and start over
    Replace,
    /// Infinite scroll: grow the list
    Append,
}

/// A fetch the list view must issue after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub query: ListQuery,
    pub mode: FetchMode,
}

/// Pagination state of the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-based page index
    pub active_page: u32,
    pub items_per_page: u32,
    pub sort: SortField,
    pub order: SortOrder,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl PaginationState {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            active_page: 1,
            items_per_page: items_per_page.max(1),
            sort: SortField::Id,
            order: SortOrder::Asc,
        }
    }

    /// Initial state, overridden by `?sort=field,order` or `?sort=field&order=desc`
    /// from the page URL. Unknown values are ignored.
    pub fn from_query_string(search: &str, items_per_page: u32) -> Self {
        let mut state = Self::new(items_per_page);
        let search = search.trim_start_matches('?');

        for pair in search.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace("%2C", ",").replace("%2c", ",");
            match key {
                "sort" => {
                    let (field, order) = match value.split_once(',') {
                        Some((field, order)) => (field.to_string(), Some(order.to_string())),
                        None => (value.clone(), None),
                    };
                    if let Ok(field) = field.parse() {
                        state.sort = field;
                    }
                    if let Some(order) = order.and_then(|o| o.parse().ok()) {
                        state.order = order;
                    }
                }
                "order" => {
                    if let Ok(order) = value.parse() {
                        state.order = order;
                    }
                }
                _ => {}
            }
        }
        state
    }

    /// Sort parameter as sent to the backend: `"<field>,<order>"`
    pub fn sort_param(&self) -> String {
        format!("{},{}", self.sort.as_str(), self.order)
    }

    /// Query for the current page
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: Some(self.active_page.saturating_sub(1)),
            size: Some(self.items_per_page),
            sort: Some(self.sort_param()),
        }
    }

    fn request(&self, mode: FetchMode) -> ListRequest {
        ListRequest {
            query: self.query(),
            mode,
        }
    }

    /// Back to the first page; the list is rebuilt from scratch.
    /// Used on mount, on refresh and after any successful mutation.
    pub fn reset(&mut self) -> ListRequest {
        self.active_page = 1;
        self.request(FetchMode::Replace)
    }

    /// Column header click: same column flips the order, another column
    /// starts ascending. Always restarts at page 1.
    pub fn sort_by(&mut self, field: SortField) -> ListRequest {
        self.order = if self.sort == field {
            self.order.toggled()
        } else {
            SortOrder::Asc
        };
        self.sort = field;
        self.active_page = 1;
        self.request(FetchMode::Replace)
    }

    /// Whether the backend advertised a page after the active one
    pub fn has_more(&self, links: &PageLinks) -> bool {
        links
            .next_page()
            .is_some_and(|next| self.active_page.saturating_sub(1) < next)
    }

    /// Infinite scroll trigger. Ignored until the viewport has actually been
    /// scrolled and while no further page exists.
    pub fn load_more(&mut self, scroll_offset: f64, links: &PageLinks) -> Option<ListRequest> {
        if scroll_offset <= 0.0 || !self.has_more(links) {
            return None;
        }
        self.active_page += 1;
        Some(self.request(FetchMode::Append))
    }

    pub fn sort_indicator(&self, field: SortField) -> SortIndicator {
        if self.sort != field {
            return SortIndicator::Unsorted;
        }
        match self.order {
            SortOrder::Asc => SortIndicator::Ascending,
            SortOrder::Desc => SortIndicator::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_with_next(next: u32) -> PageLinks {
        PageLinks {
            first: Some(0),
            next: Some(next),
            last: Some(next + 1),
            ..PageLinks::default()
        }
    }

    #[test]
    fn test_default_query() {
        let state = PaginationState::default();
        let query = state.query();

        assert_eq!(query.page, Some(0));
        assert_eq!(query.size, Some(ITEMS_PER_PAGE));
        assert_eq!(query.sort.as_deref(), Some("id,asc"));
        assert_eq!(query.to_query_string(), "page=0&size=20&sort=id,asc");
    }

    #[test]
    fn test_sort_same_column_twice_restores_order() {
        let mut state = PaginationState::default();
        state.active_page = 4;
        let original = state.order;

        let first = state.sort_by(SortField::Id);
        assert_eq!(state.order, original.toggled());
        assert_eq!(state.active_page, 1);
        assert_eq!(first.mode, FetchMode::Replace);
        assert_eq!(first.query.sort.as_deref(), Some("id,desc"));

        state.active_page = 3;
        let second = state.sort_by(SortField::Id);
        assert_eq!(state.order, original);
        assert_eq!(state.active_page, 1);
        assert_eq!(second.query.page, Some(0));
        assert_eq!(second.query.sort.as_deref(), Some("id,asc"));
    }

    #[test]
    fn test_sort_new_column_starts_ascending() {
        let mut state = PaginationState::default();
        state.sort_by(SortField::Id);
        assert_eq!(state.order, SortOrder::Desc);

        let request = state.sort_by(SortField::ProjectName);
        assert_eq!(state.sort, SortField::ProjectName);
        assert_eq!(state.order, SortOrder::Asc);
        assert_eq!(request.query.sort.as_deref(), Some("projectName,asc"));
    }

    #[test]
    fn test_request_uses_committed_sort() {
        let mut state = PaginationState::default();
        let request = state.sort_by(SortField::Link);
        assert_eq!(request.query, state.query());
    }

    #[test]
    fn test_has_more() {
        let state = PaginationState::default();
        assert!(state.has_more(&links_with_next(1)));
        assert!(!state.has_more(&PageLinks::default()));

        let mut later = PaginationState::default();
        later.active_page = 3;
        assert!(!later.has_more(&links_with_next(2)));
        assert!(later.has_more(&links_with_next(3)));
    }

    #[test]
    fn test_load_more_requires_scroll() {
        let mut state = PaginationState::default();
        assert_eq!(state.load_more(0.0, &links_with_next(1)), None);
        assert_eq!(state.active_page, 1);
    }

    #[test]
    fn test_load_more_requires_next_page() {
        let mut state = PaginationState::default();
        assert_eq!(state.load_more(250.0, &PageLinks::default()), None);
        assert_eq!(state.active_page, 1);
    }

    #[test]
    fn test_load_more_appends_next_page() {
        let mut state = PaginationState::default();
        let request = state.load_more(250.0, &links_with_next(1)).unwrap();

        assert_eq!(state.active_page, 2);
        assert_eq!(request.mode, FetchMode::Append);
        assert_eq!(request.query.page, Some(1));
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut state = PaginationState::default();
        state.active_page = 5;
        state.order = SortOrder::Desc;

        let request = state.reset();
        assert_eq!(state.active_page, 1);
        assert_eq!(state.order, SortOrder::Desc);
        assert_eq!(request.mode, FetchMode::Replace);
        assert_eq!(request.query.page, Some(0));
    }

    #[test]
    fn test_from_query_string() {
        let state = PaginationState::from_query_string("?sort=projectName,desc", 10);
        assert_eq!(state.sort, SortField::ProjectName);
        assert_eq!(state.order, SortOrder::Desc);
        assert_eq!(state.items_per_page, 10);

        let state = PaginationState::from_query_string("sort=link&order=desc", 20);
        assert_eq!(state.sort, SortField::Link);
        assert_eq!(state.order, SortOrder::Desc);

        let state = PaginationState::from_query_string("?sort=link%2Cdesc", 20);
        assert_eq!(state.sort, SortField::Link);
        assert_eq!(state.order, SortOrder::Desc);

        let state = PaginationState::from_query_string("?sort=bogus,sideways&page=3", 20);
        assert_eq!(state, PaginationState::new(20));
    }

    #[test]
    fn test_sort_indicator() {
        let mut state = PaginationState::default();
        assert_eq!(state.sort_indicator(SortField::Id), SortIndicator::Ascending);
        assert_eq!(state.sort_indicator(SortField::Link), SortIndicator::Unsorted);

        state.sort_by(SortField::Id);
        assert_eq!(state.sort_indicator(SortField::Id), SortIndicator::Descending);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("imageUrl".parse::<SortField>(), Ok(SortField::ImageUrl));
        assert!("user".parse::<SortField>().is_err());
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
    }
}
