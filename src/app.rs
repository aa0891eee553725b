use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::ui::{
    Header, NotFoundPage, PortfolioDeleteDialog, PortfolioDetail, PortfolioList, PortfolioUpdate,
    provide_portfolio_context,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// List page that rebuilds after every write
#[component]
fn PortfolioListRoute() -> impl IntoView {
    view! { <PortfolioList/> }
}

/// Delete dialog over the list it was opened from
#[component]
fn PortfolioDeleteRoute() -> impl IntoView {
    view! {
        <PortfolioList watch_mutations=false/>
        <PortfolioDeleteDialog/>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One portfolio slice for every entity page
    let _portfolio_ctx = provide_portfolio_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio_app.css"/>

        <Title text="Portfolio App"/>

        <Router>
            <Header/>
            <main class="container">
                // `/portfolio/new` must be declared before `/portfolio/:id`
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/portfolio"/> }/>
                    <Route path=path!("/portfolio") view=PortfolioListRoute/>
                    <Route path=path!("/portfolio/new") view=PortfolioUpdate/>
                    <Route path=path!("/portfolio/:id") view=PortfolioDetail/>
                    <Route path=path!("/portfolio/:id/edit") view=PortfolioUpdate/>
                    <Route path=path!("/portfolio/:id/delete") view=PortfolioDeleteRoute/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_view<V: IntoView>(_view: fn() -> V) {}

    #[test]
    fn test_route_views_take_no_props() {
        route_view(PortfolioListRoute);
        route_view(PortfolioDeleteRoute);
        route_view(PortfolioUpdate);
        route_view(PortfolioDetail);
        route_view(NotFoundPage);
    }
}
