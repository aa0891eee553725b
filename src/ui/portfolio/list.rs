//! Portfolio table with sortable columns and infinite scroll

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::context::use_portfolio_context;
use crate::core::{
    ITEMS_PER_PAGE, ListRequest, PaginationState, Portfolio, PortfolioState, SortField, SortIndicator,
};
use crate::ui::common::{ErrorMessage, LoadingSpinner, WarningMessageStatic};
use crate::ui::icon::{Icon, icons};

/// Fraction of the page that must be scrolled past before the next page loads
const SCROLL_THRESHOLD: f64 = 0.8;

/// Next page to fetch for a scroll position. Nothing while a load is running,
/// before the threshold, or once the list's signals are disposed.
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn scroll_request(
    state: RwSignal<PortfolioState>,
    pagination: RwSignal<PaginationState>,
    offset: f64,
    viewport: f64,
    page_height: f64,
) -> Option<ListRequest> {
    let links = state
        .try_with_untracked(|s| (!s.loading).then_some(s.links))
        .flatten()?;
    if offset + viewport < page_height * SCROLL_THRESHOLD {
        return None;
    }
    pagination.try_update(|p| p.load_more(offset, &links)).flatten()
}

/// Column header that sorts the table by its field
#[component]
fn SortableHeader(
    field: SortField,
    pagination: RwSignal<PaginationState>,
    on_sort: Callback<SortField>,
) -> impl IntoView {
    let icon = move || match pagination.with(|p| p.sort_indicator(field)) {
        SortIndicator::Unsorted => icons::SORT,
        SortIndicator::Ascending => icons::SORT_UP,
        SortIndicator::Descending => icons::SORT_DOWN,
    };

    view! {
        <th
            class="hand"
            data-cy=format!("sort-{}", field.as_str())
            on:click=move |_| on_sort.run(field)
        >
            <span>{field.label()}</span>
            {move || view! { <Icon name=icon() class="icon-text"/> }}
        </th>
    }
}

#[component]
fn PortfolioRow(portfolio: Portfolio) -> impl IntoView {
    let id = portfolio.id_label();
    let view_href = format!("/portfolio/{}", id);
    let edit_href = format!("/portfolio/{}/edit", id);
    let delete_href = format!("/portfolio/{}/delete", id);
    let login = portfolio.user_login().to_string();

    view! {
        <tr data-cy="entityTable">
            <td>
                <A href=view_href.clone() attr:class="btn-link">{id}</A>
            </td>
            <td>{portfolio.project_name}</td>
            <td>{portfolio.description}</td>
            <td>{portfolio.image_url}</td>
            <td>{portfolio.link}</td>
            <td>{login}</td>
            <td class="text-end">
                <div class="btn-group">
                    <A href=view_href attr:class="btn-info btn-sm" attr:data-cy="entityDetailsButton">
                        <Icon name=icons::EYE class="icon-text"/>
                        <span class="btn-label">"View"</span>
                    </A>
                    <A href=edit_href attr:class="btn-primary btn-sm" attr:data-cy="entityEditButton">
                        <Icon name=icons::EDIT class="icon-text"/>
                        <span class="btn-label">"Edit"</span>
                    </A>
                    <A href=delete_href attr:class="btn-danger btn-sm" attr:data-cy="entityDeleteButton">
                        <Icon name=icons::TRASH class="icon-text"/>
                        <span class="btn-label">"Delete"</span>
                    </A>
                </div>
            </td>
        </tr>
    }
}

/// Portfolio list page.
///
/// With `watch_mutations` the table rebuilds itself whenever a write
/// succeeds. The delete route turns it off: the dialog over the table owns
/// that success and navigates away, which remounts a fresh list anyway.
#[component]
pub fn PortfolioList(#[prop(default = true)] watch_mutations: bool) -> impl IntoView {
    let ctx = use_portfolio_context();
    let state = ctx.state;
    let client = ctx.client;
    let location = use_location();

    let pagination = RwSignal::new(PaginationState::from_query_string(
        &location.search.get_untracked(),
        ITEMS_PER_PAGE,
    ));

    let fetch = move |request: ListRequest| {
        spawn_local(async move {
            // Failures land in the slice's error message
            let _ = client.get_entities(request).await;
        });
    };

    let reset_all = move || {
        if let Some(request) = pagination.try_update(PaginationState::reset) {
            fetch(request);
        }
    };

    // Initial load, then a full reset on every new write success
    Effect::new(move |previous: Option<bool>| {
        let success = watch_mutations && ctx.update_success();
        match previous {
            None => reset_all(),
            Some(false) if success => reset_all(),
            _ => {}
        }
        success
    });

    let on_sort = Callback::new(move |field: SortField| {
        if let Some(request) = pagination.try_update(|p| p.sort_by(field)) {
            fetch(request);
        }
    });

    #[cfg(not(feature = "ssr"))]
    {
        let handle_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let window = window();
            let offset = window.scroll_y().unwrap_or_default();
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            let page_height = document()
                .body()
                .map(|body| f64::from(body.scroll_height()))
                .unwrap_or_default();
            if let Some(request) = scroll_request(state, pagination, offset, viewport, page_height) {
                fetch(request);
            }
        });

        on_cleanup(move || handle_scroll.remove());
    }

    let loading = Memo::new(move |_| ctx.loading());
    let has_rows = Memo::new(move |_| state.with(|s| !s.entities.is_empty()));
    let error = Signal::derive(move || ctx.error_message());

    view! {
        <div class="page">
            <h2 id="portfolio-heading" data-cy="PortfolioHeading" class="page-heading">
                <span>"Portfolios"</span>
                <div class="heading-actions">
                    <button
                        class="btn-info"
                        disabled=move || loading.get()
                        on:click=move |_| reset_all()
                    >
                        <Icon name=icons::REFRESH class="icon-text"/>
                        "Refresh List"
                    </button>
                    <A
                        href="/portfolio/new"
                        attr:class="btn-primary"
                        attr:id="jh-create-entity"
                        attr:data-cy="entityCreateButton"
                    >
                        <Icon name=icons::PLUS class="icon-text"/>
                        "Create new Portfolio"
                    </A>
                </div>
            </h2>

            <ErrorMessage error=error/>

            <div class="table-responsive">
                <Show
                    when=move || has_rows.get()
                    fallback=move || view! {
                        <Show when=move || state.with(PortfolioState::is_empty_result)>
                            <WarningMessageStatic message="No Portfolios found".to_string()/>
                        </Show>
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                {SortField::ALL.into_iter().map(|field| view! {
                                    <SortableHeader field=field pagination=pagination on_sort=on_sort/>
                                }).collect_view()}
                                <th>
                                    <span>"User"</span>
                                    <Icon name=icons::SORT class="icon-text"/>
                                </th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.entities.clone())
                                key=|portfolio| portfolio.id
                                children=|portfolio| view! { <PortfolioRow portfolio=portfolio/> }
                            />
                        </tbody>
                    </table>
                </Show>
                <Show when=move || loading.get()>
                    <LoadingSpinner message="Loading ...".to_string()/>
                </Show>
            </div>
        </div>
    }
}
