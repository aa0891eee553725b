//! Message banners for errors, warnings and confirmations

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Static warning message (always visible)
#[component]
pub fn WarningMessageStatic(
    /// Warning message text
    message: String,
) -> impl IntoView {
    view! {
        <div class="warning-message">
            <Icon name=icons::WARNING class="icon-text"/>
            <span>{message}</span>
        </div>
    }
}
