//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FoodItem;
use crate::modal::ModalState;
use crate::sync::Mutation;

/// Error shown in the banner. `seq` lets a dismiss timer clear only the
/// error it was started for.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub seq: u32,
    pub message: String,
}

#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Local mirror of `/foods`, in server order
    pub foods: Vec<FoodItem>,
    pub modal: ModalState,
    /// True until the first list fetch settles
    pub loading: bool,
    pub error: Option<ErrorNotice>,
    pub error_seq: u32,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a server-confirmed change to the food list
pub fn store_apply(store: &DashboardStore, mutation: Mutation) {
    mutation.apply(&mut store.foods().write());
}

pub fn store_set_loading(store: &DashboardStore, loading: bool) {
    store.loading().set(loading);
}

/// Show an error; returns its sequence number
pub fn store_show_error(store: &DashboardStore, message: String) -> u32 {
    let seq = store.error_seq().get_untracked() + 1;
    store.error_seq().set(seq);
    store.error().set(Some(ErrorNotice { seq, message }));
    seq
}

/// Clear the error if it is still the one numbered `seq`
pub fn store_dismiss_error(store: &DashboardStore, seq: u32) {
    store.error().update(|error| {
        if error.as_ref().is_some_and(|e| e.seq == seq) {
            *error = None;
        }
    });
}

pub fn store_clear_error(store: &DashboardStore) {
    store.error().set(None);
}

// ========================
// Modal Transitions
// ========================

pub fn store_toggle_add(store: &DashboardStore) {
    store.modal().write().toggle_add();
}

pub fn store_close_add(store: &DashboardStore) {
    store.modal().write().close_add();
}

pub fn store_begin_edit(store: &DashboardStore, food: FoodItem) {
    store.modal().write().begin_edit(food);
}

pub fn store_toggle_edit(store: &DashboardStore) {
    store.modal().write().toggle_edit();
}

pub fn store_close_edit(store: &DashboardStore) {
    store.modal().write().close_edit();
}
