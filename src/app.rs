//! Food Catalog App
//!
//! Dashboard: header, modals, error banner and the food grid.

use leptos::prelude::*;

use crate::components::{AddFoodModal, EditFoodModal, ErrorBanner, FoodCard, Header};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::handlers;
use crate::store::{store_toggle_add, DashboardState, DashboardStateStoreFields, DashboardStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let reload_trigger = signal(0u32);
    let ctx = AppContext::new(reload_trigger, config);
    let store: DashboardStore = DashboardStore::new(DashboardState::new());

    provide_context(ctx);
    provide_context(store);

    // Load on mount and on every reload trigger
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[APP] Loading foods, trigger={}", trigger);
        handlers::load_foods(ctx, store);
    });

    view! {
        <Header on_open_add=move |_| store_toggle_add(&store) />
        <AddFoodModal />
        <EditFoodModal />
        <ErrorBanner />

        <main class="foods-container" data-testid="foods-list">
            <Show when=move || store.loading().get()>
                <p class="loading">"Loading..."</p>
            </Show>
            // Cards are static, so any field change must re-key the card
            <For
                each=move || store.foods().get()
                key=|food| {
                    (
                        food.id,
                        food.name.clone(),
                        food.description.clone(),
                        food.price.to_bits(),
                        food.available,
                        food.image.clone(),
                    )
                }
                children=move |food| view! { <FoodCard food=food /> }
            />
            <Show when=move || !store.loading().get() && store.foods().read().is_empty()>
                <p class="empty">"No dishes yet."</p>
            </Show>
        </main>
    }
}
