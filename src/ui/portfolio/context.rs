//! Portfolio context shared by the entity pages
//!
//! One state slice lives for the whole app session. Pages reach it, and the
//! client bound to it, through [`use_portfolio_context`].

use leptos::prelude::*;

use crate::core::{EntityClient, HttpPortfolioApi, PortfolioState};

/// Client type every portfolio page talks through
pub type PortfolioClient = EntityClient<HttpPortfolioApi, RwSignal<PortfolioState>>;

#[derive(Clone, Copy)]
pub struct PortfolioContext {
    /// Shared slice, read reactively by the pages
    pub state: RwSignal<PortfolioState>,
    /// Issues requests and reports into `state`
    pub client: PortfolioClient,
}

impl PortfolioContext {
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn updating(&self) -> bool {
        self.state.with(|s| s.updating)
    }

    pub fn update_success(&self) -> bool {
        self.state.with(|s| s.update_success)
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.with(|s| s.error_message.clone())
    }
}

/// Provide the portfolio context to the component tree
pub fn provide_portfolio_context() -> PortfolioContext {
    let state = RwSignal::new(PortfolioState::default());
    let ctx = PortfolioContext {
        state,
        client: EntityClient::new(HttpPortfolioApi::default(), state),
    };

    provide_context(ctx);
    ctx
}

/// Get the portfolio context
pub fn use_portfolio_context() -> PortfolioContext {
    expect_context::<PortfolioContext>()
}
