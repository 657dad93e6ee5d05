//! Dashboard Handlers
//!
//! Wire the sync operations to the store: run the remote call, apply the
//! confirmed change, then bump the refresh trigger. Failures are logged and
//! shown in the error banner; local state stays as it was.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::{FoodItem, FoodPatch, NewFood};
use crate::store::{
    store_apply, store_dismiss_error, store_set_loading, store_show_error, DashboardStore,
};
use crate::sync::{self, Mutation};

/// Log, show in the banner, and schedule auto-dismiss.
pub fn report_error(ctx: AppContext, store: DashboardStore, action: &str, err: ApiError) {
    log::error!("[APP] {} failed: {}", action, err);
    let seq = store_show_error(&store, format!("Could not {}: {}", action, err.user_message()));

    let dismiss_ms = ctx.error_dismiss_ms();
    if dismiss_ms > 0 {
        spawn_local(async move {
            TimeoutFuture::new(dismiss_ms).await;
            store_dismiss_error(&store, seq);
        });
    }
}

fn settle(ctx: AppContext, store: DashboardStore, action: &str, result: Result<Mutation, ApiError>) {
    match result {
        Ok(mutation) => {
            store_apply(&store, mutation);
            ctx.reload();
        }
        Err(err) => {
            let not_found = err.is_not_found();
            report_error(ctx, store, action, err);
            if not_found {
                ctx.reload();
            }
        }
    }
}

/// Refetch the full list (mount and every reload trigger)
pub fn load_foods(ctx: AppContext, store: DashboardStore) {
    spawn_local(async move {
        let result = sync::fetch_all(&ctx.api()).await;
        store_set_loading(&store, false);
        match result {
            Ok(mutation) => store_apply(&store, mutation),
            Err(err) => report_error(ctx, store, "load the menu", err),
        }
    });
}

pub fn add_food(ctx: AppContext, store: DashboardStore, draft: NewFood) {
    spawn_local(async move {
        let result = sync::add_food(&ctx.api(), &draft).await;
        settle(ctx, store, "add the dish", result);
    });
}

pub fn update_food(ctx: AppContext, store: DashboardStore, editing: FoodItem, patch: FoodPatch) {
    spawn_local(async move {
        let result = sync::update_food(&ctx.api(), &editing, &patch).await;
        settle(ctx, store, "update the dish", result);
    });
}

pub fn toggle_available(ctx: AppContext, store: DashboardStore, food: FoodItem) {
    let patch = FoodPatch::availability(!food.available);
    update_food(ctx, store, food, patch);
}

pub fn delete_food(ctx: AppContext, store: DashboardStore, id: u32) {
    spawn_local(async move {
        let result = sync::delete_food(&ctx.api(), id).await;
        settle(ctx, store, "delete the dish", result);
    });
}
