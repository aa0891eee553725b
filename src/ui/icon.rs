use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons without .svg)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const PLUS: &str = "plus";
    pub const REFRESH: &str = "refresh";
    pub const EYE: &str = "eye";
    pub const EDIT: &str = "edit";
    pub const TRASH: &str = "trash";
    pub const SAVE: &str = "save";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const BAN: &str = "ban";
    pub const SORT: &str = "sort";
    pub const SORT_UP: &str = "sort-up";
    pub const SORT_DOWN: &str = "sort-down";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const WARNING: &str = "warning";
    pub const LIST: &str = "list";
    pub const DOCUMENT_TEXT: &str = "document-text";
}
