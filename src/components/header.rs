//! Header Component

use leptos::prelude::*;

/// Title bar with the "new dish" button
#[component]
pub fn Header(#[prop(into)] on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header-title">"Food Catalog"</h1>
            <button class="header-add-btn" on:click=move |_| on_open_add.run(())>
                <span class="header-add-label">"New dish"</span>
                <span class="header-add-icon">"+"</span>
            </button>
        </header>
    }
}
