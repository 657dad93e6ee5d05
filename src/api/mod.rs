//! REST API Bindings
//!
//! `FoodApi` abstracts the `/foods` collection so the synchronization
//! logic can run against any backend.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{FoodItem, NewFood};

pub use http::HttpFoodApi;

/// CRUD operations on the remote food collection
///
/// Futures are `?Send`: everything runs on the single browser thread.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list(&self) -> ApiResult<Vec<FoodItem>>;

    /// `POST /foods` with `available: true`
    async fn create(&self, food: &NewFood) -> ApiResult<FoodItem>;

    /// `PUT /foods/{id}` with the full record
    async fn update(&self, food: &FoodItem) -> ApiResult<FoodItem>;

    /// `DELETE /foods/{id}`, response body ignored
    async fn delete(&self, id: u32) -> ApiResult<()>;
}
