use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::context::use_portfolio_context;
use crate::core::Portfolio;
use crate::core::validation::validate_id;
use crate::ui::common::{ErrorMessage, LoadingSpinner};
use crate::ui::icon::{Icon, icons};

#[component]
fn DetailRow(label: &'static str, id: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <dt><span id=id>{label}</span></dt>
        <dd>{move || value.get()}</dd>
    }
}

/// Read-only view of one portfolio
#[component]
pub fn PortfolioDetail() -> impl IntoView {
    let ctx = use_portfolio_context();
    let state = ctx.state;
    let client = ctx.client;
    let params = use_params_map();

    let route_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let bad_id = RwSignal::new(None::<String>);

    // Refetch whenever the route id changes
    Effect::new(move |_| {
        let raw = route_id.get();
        match validate_id(&raw) {
            Ok(id) => {
                bad_id.set(None);
                spawn_local(async move {
                    let _ = client.get_entity(id).await;
                });
            }
            Err(e) => bad_id.set(Some(format!("Invalid portfolio id '{}': {}", raw, e))),
        }
    });

    let field = move |read: fn(&Portfolio) -> String| {
        Signal::derive(move || state.with(|s| read(&s.entity)))
    };
    let error = Signal::derive(move || bad_id.get().or_else(|| ctx.error_message()));
    let loading = Memo::new(move |_| ctx.loading());

    view! {
        <div class="page detail-page">
            <h2 data-cy="portfolioDetailsHeading">"Portfolio"</h2>
            <ErrorMessage error=error/>
            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>
            <dl class="jh-entity-details">
                <DetailRow label="ID" id="id" value=field(|p| p.id_label())/>
                <DetailRow label="Project Name" id="projectName" value=field(|p| p.project_name.clone())/>
                <DetailRow label="Description" id="description" value=field(|p| p.description.clone())/>
                <DetailRow label="Image Url" id="imageUrl" value=field(|p| p.image_url.clone())/>
                <DetailRow label="Link" id="link" value=field(|p| p.link.clone())/>
                <DetailRow label="User" id="user" value=field(|p| p.user_login().to_string())/>
            </dl>
            <div class="form-actions">
                <A href="/portfolio" attr:class="btn-info" attr:data-cy="entityDetailsBackButton">
                    <Icon name=icons::ARROW_LEFT class="icon-text"/>
                    <span>"Back"</span>
                </A>
                <A
                    href=move || format!("/portfolio/{}/edit", route_id.get())
                    attr:class="btn-primary"
                >
                    <Icon name=icons::EDIT class="icon-text"/>
                    <span>"Edit"</span>
                </A>
            </div>
        </div>
    }
}
