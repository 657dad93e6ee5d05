//! Add Food Modal Component

use leptos::prelude::*;

use crate::components::{FoodFormView, ModalFrame};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::form::FoodForm;
use crate::handlers;
use crate::store::{store_close_add, store_toggle_add, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn AddFoodModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let is_open = Signal::derive(move || store.modal().read().add_open);

    let on_submit = move |values: FoodForm| -> Result<(), FormError> {
        let draft = values.to_new_food()?;
        handlers::add_food(ctx, store, draft);
        store_close_add(&store);
        Ok(())
    };

    view! {
        <ModalFrame
            is_open=is_open
            on_close=move |_| store_toggle_add(&store)
            title="New dish"
        >
            <FoodFormView
                initial=FoodForm::default()
                submit_label="Add dish"
                on_submit=on_submit
            />
        </ModalFrame>
    }
}
