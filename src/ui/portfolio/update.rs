//! Create/edit form
//!
//! `/portfolio/new` creates, `/portfolio/:id/edit` edits. The page leaves for
//! the list once its own save has succeeded.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::context::use_portfolio_context;
use crate::core::{FieldErrors, FormMode, PortfolioField, PortfolioForm, SuccessLatch, User};
use crate::ui::common::{ErrorMessage, FormField, InlineSpinner, LoadingSpinner, SelectField};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn PortfolioUpdate() -> impl IntoView {
    let ctx = use_portfolio_context();
    let state = ctx.state;
    let client = ctx.client;
    let params = use_params_map();
    let navigate = StoredValue::new(use_navigate());

    let route = FormMode::from_route(params.with_untracked(|p| p.get("id")).as_deref());
    let mode = route.as_ref().ok().copied();
    let is_new = mode.is_none_or(|m| m.is_new());

    let form = RwSignal::new(PortfolioForm::default());
    let users = RwSignal::new(Vec::<User>::new());
    let errors = RwSignal::new(route.err().unwrap_or_default());
    let save_latch = RwSignal::new(SuccessLatch::default());

    // Load the record being edited and the owner choices
    Effect::new(move |_| {
        if let Some(FormMode::Edit(id)) = mode {
            spawn_local(async move {
                if let Ok(entity) = client.get_entity(id).await {
                    form.set(PortfolioForm::from_entity(&entity));
                }
            });
        }
        spawn_local(async move {
            if let Ok(list) = client.get_users().await {
                users.set(list);
            }
        });
    });

    // Back to the list after our own save
    Effect::new(move |_| {
        let success = ctx.update_success();
        let done = save_latch.try_update(|l| l.observe(success)).unwrap_or(false);
        if done {
            navigate.with_value(|nav| nav("/portfolio", Default::default()));
        }
    });

    let revalidate = move || {
        if let Some(mode) = mode {
            let found = users.with_untracked(|u| form.with_untracked(|f| f.validate(mode, u)));
            errors.set(found);
        }
    };

    // Once a submit has shown errors, keep them current while typing
    let setter = move |apply: fn(&mut PortfolioForm, String)| {
        Callback::new(move |value: String| {
            form.update(|f| apply(f, value));
            if !errors.with_untracked(FieldErrors::is_empty) {
                revalidate();
            }
        })
    };
    let value = move |read: fn(&PortfolioForm) -> String| {
        Signal::derive(move || form.with(read))
    };
    let error = move |field: PortfolioField| {
        Signal::derive(move || errors.with(|e| e.message(field)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = mode else {
            return;
        };

        let built = users.with_untracked(|u| form.with_untracked(|f| f.to_entity(mode, u)));
        let entity = match built {
            Ok(entity) => entity,
            Err(found) => {
                errors.set(found);
                return;
            }
        };

        errors.set(FieldErrors::new());
        let current_success = state.with_untracked(|s| s.update_success);
        save_latch.update(|l| l.arm(current_success));

        spawn_local(async move {
            // Failures land in the slice's error message
            let _ = match mode {
                FormMode::Create => client.create_entity(entity).await,
                FormMode::Edit(_) => client.update_entity(entity).await,
            };
        });
    };

    let user_options = Signal::derive(move || {
        users.with(|list| {
            list.iter()
                .map(|u| (u.id.clone(), u.login.clone()))
                .collect::<Vec<_>>()
        })
    });
    let loading = Memo::new(move |_| ctx.loading());
    let updating = Memo::new(move |_| ctx.updating());
    let api_error = Signal::derive(move || ctx.error_message());

    view! {
        <div class="page form-page">
            <h2 id="portfolioApp.portfolio.home.createOrEditLabel" data-cy="PortfolioCreateUpdateHeading">
                "Create or edit a Portfolio"
            </h2>

            <ErrorMessage error=api_error/>
            {(mode.is_none()).then(|| view! {
                <ErrorMessage error=error(PortfolioField::Id)/>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner message="Loading...".to_string()/> }
            >
                <form on:submit=on_submit novalidate=true>
                    {(!is_new).then(|| view! {
                        <FormField
                            label=PortfolioField::Id.label().to_string()
                            name="id"
                            required=true
                            readonly=true
                            value=value(|f| f.id.clone())
                            on_input=setter(|f, v| f.id = v)
                            error=error(PortfolioField::Id)
                        />
                    })}
                    <FormField
                        label=PortfolioField::ProjectName.label().to_string()
                        name="projectName"
                        required=true
                        value=value(|f| f.project_name.clone())
                        on_input=setter(|f, v| f.project_name = v)
                        error=error(PortfolioField::ProjectName)
                    />
                    <FormField
                        label=PortfolioField::Description.label().to_string()
                        name="description"
                        required=true
                        value=value(|f| f.description.clone())
                        on_input=setter(|f, v| f.description = v)
                        error=error(PortfolioField::Description)
                    />
                    <FormField
                        label=PortfolioField::ImageUrl.label().to_string()
                        name="imageUrl"
                        required=true
                        input_type="url"
                        value=value(|f| f.image_url.clone())
                        on_input=setter(|f, v| f.image_url = v)
                        error=error(PortfolioField::ImageUrl)
                    />
                    <FormField
                        label=PortfolioField::Link.label().to_string()
                        name="link"
                        required=true
                        input_type="url"
                        value=value(|f| f.link.clone())
                        on_input=setter(|f, v| f.link = v)
                        error=error(PortfolioField::Link)
                    />
                    <SelectField
                        label=PortfolioField::User.label().to_string()
                        name="user"
                        required=true
                        value=value(|f| f.user_id.clone())
                        on_change=setter(|f, v| f.user_id = v)
                        options=user_options
                        error=error(PortfolioField::User)
                    />

                    <div class="form-actions">
                        <A href="/portfolio" attr:class="btn-info" attr:id="cancel-save" attr:data-cy="entityCreateCancelButton">
                            <Icon name=icons::ARROW_LEFT class="icon-text"/>
                            <span>"Back"</span>
                        </A>
                        <button
                            type="submit"
                            class="btn-primary"
                            id="save-entity"
                            data-cy="entityCreateSaveButton"
                            disabled=move || updating.get() || mode.is_none()
                        >
                            <Show
                                when=move || updating.get()
                                fallback=|| view! { <Icon name=icons::SAVE class="icon-text"/> }
                            >
                                <InlineSpinner/>
                            </Show>
                            <span>"Save"</span>
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
