//! HTTP Implementation
//!
//! `reqwest` client (fetch-backed on wasm32) for the `/foods` endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::FoodApi;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateFoodBody, FoodItem, NewFood};

/// Cheap to clone: the client and config are shared.
#[derive(Clone)]
pub struct HttpFoodApi {
    client: Client,
    config: Arc<AppConfig>,
}

impl HttpFoodApi {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Fail on non-2xx, keeping the body text as the message.
    async fn check(response: Response, id: Option<u32>) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
        Err(ApiError::from_status(status.as_u16(), id, message))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list(&self) -> ApiResult<Vec<FoodItem>> {
        let url = self.config.foods_url();
        log::debug!("[API] GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(Self::check(response, None).await?).await
    }

    async fn create(&self, food: &NewFood) -> ApiResult<FoodItem> {
        let url = self.config.foods_url();
        log::debug!("[API] POST {} ({})", url, food.name);
        let response = self
            .client
            .post(&url)
            .json(&CreateFoodBody::from(food))
            .send()
            .await?;
        Self::decode(Self::check(response, None).await?).await
    }

    async fn update(&self, food: &FoodItem) -> ApiResult<FoodItem> {
        let url = self.config.food_url(food.id);
        log::debug!("[API] PUT {}", url);
        let response = self.client.put(&url).json(food).send().await?;
        Self::decode(Self::check(response, Some(food.id)).await?).await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let url = self.config.food_url(id);
        log::debug!("[API] DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_config() {
        let api = HttpFoodApi::new(AppConfig::default());
        let clone = api.clone();

        assert!(Arc::ptr_eq(&api.config, &clone.config));
        assert_eq!(clone.config.foods_url(), "http://localhost:3333/foods");
    }
}
