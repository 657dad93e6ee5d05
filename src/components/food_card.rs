//! Food Card Component
//!
//! One dish in the catalog grid.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::handlers;
use crate::models::{format_price, FoodItem};
use crate::store::{store_begin_edit, use_dashboard_store};

#[component]
pub fn FoodCard(food: FoodItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let id = food.id;
    let available = food.available;
    let for_edit = food.clone();
    let for_toggle = food.clone();

    view! {
        <div class=if available { "food-card" } else { "food-card unavailable" }>
            <div class="food-card-image">
                <img src=food.image.clone() alt=food.name.clone() />
            </div>
            <section class="food-card-body">
                <h2>{food.name.clone()}</h2>
                <p class="food-card-description">{food.description.clone()}</p>
                <p class="food-card-price">{format_price(food.price)}</p>
            </section>
            <section class="food-card-footer">
                <div class="food-card-actions">
                    <button
                        class="edit-btn"
                        title="Edit"
                        on:click=move |_| store_begin_edit(&store, for_edit.clone())
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        on_confirm=move |_| handlers::delete_food(ctx, store, id)
                    />
                </div>
                <label class="availability-switch">
                    <span>{if available { "Available" } else { "Unavailable" }}</span>
                    // The box only flips when the confirmed update re-keys the card
                    <input
                        type="checkbox"
                        prop:checked=available
                        on:click=move |ev| {
                            ev.prevent_default();
                            handlers::toggle_available(ctx, store, for_toggle.clone());
                        }
                    />
                    <span class="slider"></span>
                </label>
            </section>
        </div>
    }
}
