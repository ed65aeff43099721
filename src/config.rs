use crate::error::{AppError, AppResult};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,

    #[serde(default = "default_success_toast_ms")]
    pub success_toast_ms: u64,
}

// Default value functions
fn default_api_base_url() -> String {
    "https://localhost:7075".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_success_toast_ms() -> u64 {
    1500
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if url::Url::parse(&self.api_base_url).is_err() {
            return Err(AppError::Config(format!(
                "API_BASE_URL is not a valid URL: {}",
                self.api_base_url
            )));
        }

        if self.success_toast_ms == 0 {
            return Err(AppError::Config(
                "SUCCESS_TOAST_MS must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn success_toast(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.success_toast_ms)
    }
}
