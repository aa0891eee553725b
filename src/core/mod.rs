//! Core domain models and business logic for portfolio management

pub mod client;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod links;
pub mod model;
pub mod pagination;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod store;
pub mod validation;
#[cfg(test)]
mod tests;

pub use client::{EntityClient, PortfolioApi, PortfolioPage};
pub use error::ApiError;
pub use form::{FormMode, PortfolioForm};
pub use http::HttpPortfolioApi;
pub use links::{LinkHeaderError, PageLinks, parse_link_header};
pub use model::{Portfolio, User};
pub use pagination::{
    FetchMode, ITEMS_PER_PAGE, ListQuery, ListRequest, PaginationState, SortField, SortIndicator,
    SortOrder,
};
pub use store::{PortfolioAction, PortfolioState, StateSlice, SuccessLatch};
pub use validation::{FieldErrors, PortfolioField, ValidationError};
