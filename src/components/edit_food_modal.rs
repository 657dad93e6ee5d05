//! Edit Food Modal Component
//!
//! Form is rebuilt from the selected record each time the modal opens.

use leptos::prelude::*;

use crate::components::{FoodFormView, ModalFrame};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::form::FoodForm;
use crate::handlers;
use crate::store::{store_close_edit, store_toggle_edit, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn EditFoodModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let is_open = Signal::derive(move || store.modal().read().edit_open);
    let target = Memo::new(move |_| store.modal().read().edit_target().cloned());

    view! {
        <ModalFrame
            is_open=is_open
            on_close=move |_| store_toggle_edit(&store)
            title="Edit dish"
        >
            {move || target.get().map(|editing| {
                let initial = FoodForm::from_item(&editing);
                let on_submit = move |values: FoodForm| -> Result<(), FormError> {
                    let patch = values.to_patch()?;
                    handlers::update_food(ctx, store, editing.clone(), patch);
                    store_close_edit(&store);
                    Ok(())
                };
                view! {
                    <FoodFormView
                        initial=initial
                        submit_label="Save changes"
                        on_submit=on_submit
                    />
                }
            })}
        </ModalFrame>
    }
}
