use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
}

impl WebhookConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and APP__ prefixed variables
        let common = core_config::Config::load()?;

        Ok(WebhookConfig { common })
    }
}
