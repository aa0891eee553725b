use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::context::use_portfolio_context;
use crate::core::SuccessLatch;
use crate::core::validation::validate_id;
use crate::ui::common::{ConfirmDialog, ErrorMessage};

/// Record the dialog deletes: always the one named by the route
fn delete_target(raw: Option<String>) -> Result<i64, String> {
    validate_id(&raw.unwrap_or_default()).map_err(|e| format!("Invalid portfolio id: {}", e))
}

/// Delete confirmation shown over the list at `/portfolio/:id/delete`.
///
/// Arms on mount; only a success raised by its own delete closes it.
#[component]
pub fn PortfolioDeleteDialog() -> impl IntoView {
    let ctx = use_portfolio_context();
    let state = ctx.state;
    let client = ctx.client;
    let params = use_params_map();
    let navigate = StoredValue::new(use_navigate());

    let target = delete_target(params.with_untracked(|p| p.get("id")));
    let target_id = target.as_ref().ok().copied();
    let id_error = RwSignal::new(target.err());
    let latch = RwSignal::new(SuccessLatch::default());

    Effect::new(move |_| {
        let current_success = state.with_untracked(|s| s.update_success);
        latch.update(|l| l.arm(current_success));
        if let Some(id) = target_id {
            spawn_local(async move {
                let _ = client.get_entity(id).await;
            });
        }
    });

    let close = Callback::new(move |_: ()| {
        navigate.with_value(|nav| nav("/portfolio", Default::default()));
    });

    Effect::new(move |_| {
        let success = ctx.update_success();
        if latch.try_update(|l| l.observe(success)).unwrap_or(false) {
            close.run(());
        }
    });

    let on_confirm = Callback::new(move |_: ()| {
        let Some(id) = target_id else {
            return;
        };
        spawn_local(async move {
            // Failures land in the slice's error message
            let _ = client.delete_entity(id).await;
        });
    });

    let message = Signal::derive(move || {
        let id = state.with(|s| s.entity.id_label());
        format!("Are you sure you want to delete Portfolio {}?", id)
    });
    let updating = Memo::new(move |_| ctx.updating());
    let error = Signal::derive(move || id_error.get().or_else(|| ctx.error_message()));

    view! {
        <div data-cy="portfolioDeleteDialogHeading">
            <ConfirmDialog
                title="Confirm delete operation".to_string()
                message=message
                is_open=Signal::stored(true)
                on_confirm=on_confirm
                on_cancel=close
                confirm_text="Delete".to_string()
                is_destructive=true
                busy=updating
            />
            <div class="modal-error">
                <ErrorMessage error=error/>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_target_comes_from_route() {
        assert_eq!(delete_target(Some("7".to_string())), Ok(7));
        assert_eq!(delete_target(Some(" 12 ".to_string())), Ok(12));
    }

    #[test]
    fn test_delete_target_rejects_bad_route_id() {
        assert!(delete_target(None).is_err());
        let err = delete_target(Some("abc".to_string())).unwrap_err();
        assert!(err.starts_with("Invalid portfolio id"));
    }
}
