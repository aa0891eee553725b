use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline validation feedback under a field
#[component]
fn FieldFeedback(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.as_ref().and_then(|e| e.get()).map(|err| view! {
            <div class="invalid-feedback">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </div>
        })
    }
}

/// Labelled text input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Used for `id`, `name` and `data-cy`
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, url, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is read-only
    #[prop(default = false)]
    readonly: bool,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                type=input_type
                id=name
                name=name
                data-cy=name
                class="input-base"
                class:is-invalid=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                readonly=readonly
            />
            <FieldFeedback error=error/>
        </div>
    }
}

/// Labelled select
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// Used for `id`, `name` and `data-cy`
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs; reactive so late-loading
    /// choices show up
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <select
                id=name
                name=name
                data-cy=name
                class="select-base"
                class:is-invalid=move || error.as_ref().and_then(|e| e.get()).is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=disabled
            >
                <option value="">""</option>
                {move || {
                    let selected = value.get();
                    options.get().into_iter().map(|(val, text)| {
                        let is_selected = val == selected;
                        view! {
                            <option value=val selected=is_selected>{text}</option>
                        }
                    }).collect_view()
                }}
            </select>
            <FieldFeedback error=error/>
        </div>
    }
}
