//! List Synchronization
//!
//! Remote calls that produce a [`Mutation`] on success. A mutation is only
//! applied to the local list after the server accepted the request, so a
//! failed call never touches local state.

use crate::api::FoodApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{FoodItem, FoodPatch, NewFood};

/// Local list change confirmed by the server
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Wholesale replacement from `GET /foods`
    Reloaded(Vec<FoodItem>),
    Appended(FoodItem),
    Replaced(FoodItem),
    Removed(u32),
}

impl Mutation {
    pub fn apply(self, foods: &mut Vec<FoodItem>) {
        match self {
            Mutation::Reloaded(all) => *foods = all,
            Mutation::Appended(food) => foods.push(food),
            Mutation::Replaced(food) => replace_by_id(foods, food),
            Mutation::Removed(id) => remove_by_id(foods, id),
        }
    }
}

/// Replace the entry sharing `food.id`; others are untouched.
pub fn replace_by_id(foods: &mut [FoodItem], food: FoodItem) {
    if let Some(slot) = foods.iter_mut().find(|f| f.id == food.id) {
        *slot = food;
    }
}

/// Drop every entry with `id`, keeping the order of the rest.
pub fn remove_by_id(foods: &mut Vec<FoodItem>, id: u32) {
    foods.retain(|f| f.id != id);
}

pub async fn fetch_all<A: FoodApi + ?Sized>(api: &A) -> ApiResult<Mutation> {
    let foods = api.list().await?;
    log::info!("[SYNC] Loaded {} foods", foods.len());
    Ok(Mutation::Reloaded(foods))
}

pub async fn add_food<A: FoodApi + ?Sized>(api: &A, draft: &NewFood) -> ApiResult<Mutation> {
    let created = api.create(draft).await?;
    log::info!("[SYNC] Created food #{} ({})", created.id, created.name);
    Ok(Mutation::Appended(created))
}

/// Merge `patch` over `editing` and send the full record.
pub async fn update_food<A: FoodApi + ?Sized>(
    api: &A,
    editing: &FoodItem,
    patch: &FoodPatch,
) -> ApiResult<Mutation> {
    let merged = patch.apply_to(editing);
    let mut updated = api.update(&merged).await?;
    if updated.id != editing.id {
        log::warn!(
            "[SYNC] Server answered food #{} for update of #{}",
            updated.id,
            editing.id
        );
        updated.id = editing.id;
    }
    log::info!("[SYNC] Updated food #{}", updated.id);
    Ok(Mutation::Replaced(updated))
}

/// The entry is removed only once the server confirms; a 404 surfaces as
/// `ApiError::NotFound` like any other failure.
pub async fn delete_food<A: FoodApi + ?Sized>(api: &A, id: u32) -> ApiResult<Mutation> {
    api.delete(id).await?;
    log::info!("[SYNC] Deleted food #{}", id);
    Ok(Mutation::Removed(id))
}
