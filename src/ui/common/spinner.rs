use leptos::prelude::*;

/// Classes of the spinning ring; inline spinners sit inside button text
fn ring_classes(inline: bool) -> &'static str {
    if inline {
        "spinner spinner-sm spinner-inline"
    } else {
        "spinner spinner-md"
    }
}

#[component]
fn Ring(inline: bool) -> impl IntoView {
    view! {
        <div class=ring_classes(inline) role="status" aria-live="polite">
            <div class="spinner-circle-inner"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Centered spinner for a page or table still waiting on data
#[component]
pub fn LoadingSpinner(#[prop(default = String::new())] message: String) -> impl IntoView {
    view! {
        <div class="spinner-container spinner-centered">
            <Ring inline=false/>
            {(!message.is_empty()).then(|| view! {
                <div class="spinner-label">{message}</div>
            })}
        </div>
    }
}

/// Small spinner next to a button label
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <Ring inline=true/> }
}
