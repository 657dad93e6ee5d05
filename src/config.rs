//! Build-time Configuration
//!
//! Values are baked in at compile time (`FOOD_API_URL=... trunk build`).

use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_ERROR_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST API root, the collection lives at `{api_base_url}/foods`
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// How long the error banner stays up (0 = until dismissed)
    pub error_dismiss_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
            error_dismiss_ms: DEFAULT_ERROR_DISMISS_MS,
        }
    }
}

impl AppConfig {
    /// Resolve from compile-time environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("FOOD_API_URL"),
            option_env!("FOOD_LOG_LEVEL"),
            option_env!("FOOD_ERROR_DISMISS_MS"),
        )
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>, dismiss_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
            error_dismiss_ms: dismiss_ms
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.error_dismiss_ms),
        }
    }

    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.api_base_url.trim_end_matches('/'))
    }

    pub fn food_url(&self, id: u32) -> String {
        format!("{}/{}", self.foods_url(), id)
    }
}
