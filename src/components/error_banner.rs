//! Error Banner Component
//!
//! Surfaces the last failed API call.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_clear_error, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    move || {
        store.error().get().map(|notice| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-banner-text">{notice.message}</span>
                    <button class="error-banner-retry" on:click=move |_| ctx.reload()>"Refresh"</button>
                    <button class="error-banner-close" on:click=move |_| store_clear_error(&store)>"×"</button>
                </div>
            }
        })
    }
}
