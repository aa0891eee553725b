//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found">
            <div class="not-found-icon">
                <Icon name=icons::DOCUMENT_TEXT class="w-12 h-12"/>
            </div>

            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="text-secondary">
                "The page you're looking for doesn't exist or has been moved."
            </p>

            <A href="/portfolio" attr:class="btn-primary">
                "Back to Portfolios"
            </A>
        </div>
    }
}
