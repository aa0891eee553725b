//! Entities dropdown in the header

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Header menu listing the entity pages
#[component]
pub fn EntitiesMenu() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <div class="dropdown" id="entity-menu" data-cy="entity">
            <button
                class="nav-link"
                aria-haspopup="true"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <Icon name=icons::LIST class="icon-text"/>
                <span>"Entities"</span>
            </button>
            <Show when=move || menu_open.get()>
                <div class="dropdown-menu" on:click=move |_| menu_open.set(false)>
                    <A href="/portfolio" attr:class="dropdown-item">
                        <Icon name=icons::DOCUMENT_TEXT class="icon-text"/>
                        <span>"Portfolio"</span>
                    </A>
                </div>
            </Show>
        </div>
    }
}

/// Top navigation bar
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="navbar" data-cy="navbar">
            <A href="/" attr:class="brand">"Portfolio App"</A>
            <EntitiesMenu/>
        </nav>
    }
}
