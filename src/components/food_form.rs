//! Food Form Component
//!
//! Fields shared by the add and edit modals. `on_submit` converts the
//! values and reports a validation error back for display.

use leptos::prelude::*;

use crate::error::FormError;
use crate::form::FoodForm;

#[component]
pub fn FoodFormView(
    initial: FoodForm,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<FoodForm, Result<(), FormError>>,
) -> impl IntoView {
    let (values, set_values) = signal(initial);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);
        if let Err(err) = on_submit.run(values.get()) {
            set_form_error.set(Some(err.to_string()));
        }
    };

    view! {
        <form class="food-form" on:submit=submit>
            <label>
                "Image URL"
                <input
                    type="text"
                    placeholder="Paste the link here"
                    prop:value=move || values.get().image
                    on:input=move |ev| set_values.update(|v| v.image = event_target_value(&ev))
                />
            </label>
            <div class="food-form-row">
                <label>
                    "Name"
                    <input
                        type="text"
                        placeholder="Ex: Moda Italiana"
                        prop:value=move || values.get().name
                        on:input=move |ev| set_values.update(|v| v.name = event_target_value(&ev))
                    />
                </label>
                <label class="price-field">
                    "Price"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="Ex: 19.90"
                        prop:value=move || values.get().price
                        on:input=move |ev| set_values.update(|v| v.price = event_target_value(&ev))
                    />
                </label>
            </div>
            <label>
                "Description"
                <textarea
                    rows="3"
                    prop:value=move || values.get().description
                    on:input=move |ev| set_values.update(|v| v.description = event_target_value(&ev))
                ></textarea>
            </label>
            {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="food-form-submit">{submit_label}</button>
        </form>
    }
}
