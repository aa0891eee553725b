//! Portfolio entity client
//!
//! [`PortfolioApi`] is the raw REST surface. [`EntityClient`] wraps it with the
//! state slice: every call flips `loading` or `updating` around the request and
//! records the outcome, the way the views expect to observe it.

use leptos::logging::{error, log};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::links::PageLinks;
use super::model::{Portfolio, User};
use super::pagination::{FetchMode, ListQuery, ListRequest};
use super::store::{PortfolioAction, StateSlice};

/// One page of `GET /api/portfolios`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioPage {
    pub items: Vec<Portfolio>,
    pub links: PageLinks,
    pub total_items: u64,
}

/// REST operations on portfolios (and the user list for the owner selector)
#[allow(async_fn_in_trait)]
pub trait PortfolioApi {
    async fn list(&self, query: &ListQuery) -> Result<PortfolioPage, ApiError>;
    async fn get_one(&self, id: i64) -> Result<Portfolio, ApiError>;
    /// The body never carries an identifier
    async fn create(&self, entity: &Portfolio) -> Result<Portfolio, ApiError>;
    async fn update(&self, entity: &Portfolio) -> Result<Portfolio, ApiError>;
    /// Merge-patch: the backend only overwrites the fields that are set
    async fn partial_update(&self, entity: &Portfolio) -> Result<Portfolio, ApiError>;
    async fn remove(&self, id: i64) -> Result<i64, ApiError>;
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
}

/// API client bound to the state slice it reports into
#[derive(Debug, Clone, Copy)]
pub struct EntityClient<A, S> {
    api: A,
    slice: S,
}

impl<A, S> EntityClient<A, S>
where
    A: PortfolioApi,
    S: StateSlice,
{
    pub fn new(api: A, slice: S) -> Self {
        Self { api, slice }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn slice(&self) -> &S {
        &self.slice
    }

    /// Drop everything loaded so far
    pub fn reset(&self) {
        self.slice.dispatch(PortfolioAction::Reset);
    }

    /// Fetch a page. `Replace` requests start from an empty slice.
    pub async fn get_entities(&self, request: ListRequest) -> Result<(), ApiError> {
        let ListRequest { query, mode } = request;
        if mode == FetchMode::Replace {
            self.reset();
        }
        self.slice.dispatch(PortfolioAction::ReadPending);

        match self.api.list(&query).await {
            Ok(page) => {
                log!(
                    "Loaded {} portfolios ({})",
                    page.items.len(),
                    query.to_query_string()
                );
                self.slice
                    .dispatch(PortfolioAction::ListLoaded { page, mode });
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn get_entity(&self, id: i64) -> Result<Portfolio, ApiError> {
        self.slice.dispatch(PortfolioAction::ReadPending);

        match self.api.get_one(id).await {
            Ok(entity) => {
                self.slice
                    .dispatch(PortfolioAction::EntityLoaded(entity.clone()));
                Ok(entity)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn create_entity(&self, entity: Portfolio) -> Result<Portfolio, ApiError> {
        self.slice.dispatch(PortfolioAction::WritePending);
        let result = self.api.create(&entity.without_id()).await;
        self.saved(result)
    }

    pub async fn update_entity(&self, entity: Portfolio) -> Result<Portfolio, ApiError> {
        self.slice.dispatch(PortfolioAction::WritePending);
        let result = self.api.update(&entity).await;
        self.saved(result)
    }

    pub async fn partial_update_entity(&self, entity: Portfolio) -> Result<Portfolio, ApiError> {
        self.slice.dispatch(PortfolioAction::WritePending);
        let result = self.api.partial_update(&entity).await;
        self.saved(result)
    }

    pub async fn delete_entity(&self, id: i64) -> Result<i64, ApiError> {
        self.slice.dispatch(PortfolioAction::WritePending);

        match self.api.remove(id).await {
            Ok(id) => {
                log!("Deleted portfolio {}", id);
                self.slice.dispatch(PortfolioAction::EntityDeleted(id));
                Ok(id)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Owner choices for the edit form; not tracked in the slice
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.api.list_users().await.inspect_err(|e| {
            error!("Failed to load users: {}", e);
        })
    }

    fn saved(&self, result: Result<Portfolio, ApiError>) -> Result<Portfolio, ApiError> {
        match result {
            Ok(entity) => {
                log!("Saved portfolio {}", entity.id_label());
                self.slice
                    .dispatch(PortfolioAction::EntitySaved(entity.clone()));
                Ok(entity)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&self, e: ApiError) -> ApiError {
        error!("Portfolio request failed: {}", e);
        self.slice.dispatch(PortfolioAction::Failed(e.to_string()));
        e
    }
}
