//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpFoodApi;
use crate::config::AppConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to refetch `/foods` - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to refetch `/foods` - write
    set_reload_trigger: WriteSignal<u32>,
    /// One client for the app's lifetime (browser-thread only)
    api: StoredValue<HttpFoodApi, LocalStorage>,
    error_dismiss_ms: u32,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        let error_dismiss_ms = config.error_dismiss_ms;
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            api: StoredValue::new_local(HttpFoodApi::new(config)),
            error_dismiss_ms,
        }
    }

    /// Trigger a refetch of the food list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// How long the error banner stays up (0 = until dismissed)
    pub fn error_dismiss_ms(&self) -> u32 {
        self.error_dismiss_ms
    }

    /// Shared client for the configured REST endpoint
    pub fn api(&self) -> HttpFoodApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
