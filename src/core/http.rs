//! Browser implementation of [`PortfolioApi`] on top of `gloo-net`
//!
//! Requests go to the same origin; the server forwards `/api/*` to the real
//! backend. During server rendering no request is ever issued.

use super::client::{PortfolioApi, PortfolioPage};
use super::error::ApiError;
use super::model::{Portfolio, User};
use super::pagination::ListQuery;

pub const PORTFOLIOS_PATH: &str = "/api/portfolios";
pub const USERS_PATH: &str = "/api/users";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpPortfolioApi {
    portfolios: &'static str,
    users: &'static str,
}

impl Default for HttpPortfolioApi {
    fn default() -> Self {
        Self {
            portfolios: PORTFOLIOS_PATH,
            users: USERS_PATH,
        }
    }
}

impl HttpPortfolioApi {
    pub fn new(portfolios: &'static str, users: &'static str) -> Self {
        Self { portfolios, users }
    }

    pub fn entity_url(&self, id: i64) -> String {
        format!("{}/{}", self.portfolios, id)
    }
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use gloo_net::http::{Request, Response};

    use super::*;
    use crate::core::links::{LINK_HEADER, PageLinks, TOTAL_COUNT_HEADER, parse_link_header, parse_total_count};

    fn network(e: gloo_net::Error) -> ApiError {
        ApiError::Network(e.to_string())
    }

    fn decode(e: gloo_net::Error) -> ApiError {
        ApiError::Decode(e.to_string())
    }

    /// Turn a non-2xx response into an error
    async fn ensure_ok(response: Response, id: Option<i64>) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        if status == 404
            && let Some(id) = id
        {
            return Err(ApiError::NotFound(id));
        }

        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => response.status_text(),
        };
        Err(ApiError::Http { status, message })
    }

    impl PortfolioApi for HttpPortfolioApi {
        async fn list(&self, query: &ListQuery) -> Result<PortfolioPage, ApiError> {
            let pairs = query.to_pairs();
            let response = Request::get(self.portfolios)
                .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
                .send()
                .await
                .map_err(network)?;
            let response = ensure_ok(response, None).await?;

            let headers = response.headers();
            let links = match headers.get(LINK_HEADER) {
                Some(header) => parse_link_header(&header)?,
                None => PageLinks::default(),
            };
            let total_items = parse_total_count(headers.get(TOTAL_COUNT_HEADER).as_deref());
            let items = response.json::<Vec<Portfolio>>().await.map_err(decode)?;

            Ok(PortfolioPage {
                items,
                links,
                total_items,
            })
        }

        async fn get_one(&self, id: i64) -> Result<Portfolio, ApiError> {
            let response = Request::get(&self.entity_url(id))
                .send()
                .await
                .map_err(network)?;
            ensure_ok(response, Some(id))
                .await?
                .json()
                .await
                .map_err(decode)
        }

        async fn create(&self, entity: &Portfolio) -> Result<Portfolio, ApiError> {
            let response = Request::post(self.portfolios)
                .json(&entity.without_id())
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            ensure_ok(response, None)
                .await?
                .json()
                .await
                .map_err(decode)
        }

        async fn update(&self, entity: &Portfolio) -> Result<Portfolio, ApiError> {
            let id = entity.id.ok_or(ApiError::MissingId)?;
            let response = Request::put(&self.entity_url(id))
                .json(entity)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            ensure_ok(response, Some(id))
                .await?
                .json()
                .await
                .map_err(decode)
        }

        async fn partial_update(&self, entity: &Portfolio) -> Result<Portfolio, ApiError> {
            let id = entity.id.ok_or(ApiError::MissingId)?;
            let body = serde_json::to_string(entity).map_err(|e| ApiError::Decode(e.to_string()))?;
            let response = Request::patch(&self.entity_url(id))
                .header("Content-Type", "application/merge-patch+json")
                .body(body)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            ensure_ok(response, Some(id))
                .await?
                .json()
                .await
                .map_err(decode)
        }

        async fn remove(&self, id: i64) -> Result<i64, ApiError> {
            let response = Request::delete(&self.entity_url(id))
                .send()
                .await
                .map_err(network)?;
            ensure_ok(response, Some(id)).await?;
            Ok(id)
        }

        async fn list_users(&self) -> Result<Vec<User>, ApiError> {
            let response = Request::get(self.users).send().await.map_err(network)?;
            ensure_ok(response, None)
                .await?
                .json()
                .await
                .map_err(decode)
        }
    }
}

/// SSR stubs - effects never run on the server, so these are never awaited
#[cfg(feature = "ssr")]
impl PortfolioApi for HttpPortfolioApi {
    async fn list(&self, _query: &ListQuery) -> Result<PortfolioPage, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn get_one(&self, _id: i64) -> Result<Portfolio, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn create(&self, _entity: &Portfolio) -> Result<Portfolio, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn update(&self, _entity: &Portfolio) -> Result<Portfolio, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn partial_update(&self, _entity: &Portfolio) -> Result<Portfolio, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn remove(&self, _id: i64) -> Result<i64, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Err(ApiError::Unavailable)
    }
}
