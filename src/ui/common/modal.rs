use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Whether a key press dismisses the modal. A modal whose owner is already
/// disposed never reacts.
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn dismisses(key: &str, is_open: Signal<bool>) -> bool {
    key == "Escape" && is_open.try_get_untracked().unwrap_or(false)
}

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-2xl)
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if dismisses(&ev.key(), is_open) {
                on_close.try_run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            class="modal-backdrop"
            class:modal-hidden=move || !is_open.get()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        let on_backdrop = e
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                            .is_some_and(|el| el.class_list().contains("modal-backdrop"));
                        if on_backdrop {
                            on_close.run(());
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div class=format!("w-full {} card", max_width) role="dialog" aria-modal="true">
                <div class="card-header">
                    <h3 class="title-lg">{title}</h3>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog modal.
///
/// Confirming does not close the dialog; the owner decides when the
/// confirmed operation is over.
#[component]
pub fn ConfirmDialog(
    /// Dialog title
    title: String,
    /// Dialog body, reactive so it can name a record that is still loading
    #[prop(into)]
    message: Signal<String>,
    /// Whether dialog is open
    is_open: Signal<bool>,
    /// Callback when confirmed
    on_confirm: Callback<()>,
    /// Callback when cancelled
    on_cancel: Callback<()>,
    /// Confirm button text
    #[prop(default = "Confirm".to_string())]
    confirm_text: String,
    /// Cancel button text
    #[prop(default = "Cancel".to_string())]
    cancel_text: String,
    /// Whether confirm action is destructive (uses danger button)
    #[prop(default = false)]
    is_destructive: bool,
    /// Disables the confirm button, e.g. while the request runs
    #[prop(into, default = Signal::stored(false))]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=on_cancel
            max_width="max-w-md"
        >
            <div class="space-y-4">
                <p class="text-secondary" data-cy="confirmMessage">{move || message.get()}</p>

                <div class="modal-actions">
                    <button
                        class="btn-secondary"
                        data-cy="cancelButton"
                        on:click=move |_| on_cancel.run(())
                    >
                        <Icon name=icons::BAN class="icon-text"/>
                        {cancel_text.clone()}
                    </button>
                    <button
                        class=if is_destructive { "btn-danger" } else { "btn-primary" }
                        data-cy="confirmButton"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        <Icon name=if is_destructive { icons::TRASH } else { icons::CHECK } class="icon-text"/>
                        {confirm_text.clone()}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
