use dotenv::dotenv;
use std::env;

use crate::api_connection::connection::ApiConnectionError;

pub const HF_API_KEY_ENV_VAR: &str = "HF_API_KEY";
pub const USDA_API_KEY_ENV_VAR: &str = "USDA_API_KEY";

pub const DEFAULT_EXTRACTOR_URL: &str =
    "https://api-inference.huggingface.co/models/chambliss/distilbert-for-food-extraction";
pub const DEFAULT_LOOKUP_URL: &str = "https://api.nal.usda.gov/fdc/v1/foods/search";

/// Immutable service configuration, read once at startup.
///
/// The endpoint URLs default to the real upstream services; tests construct
/// a `Config` directly to point the clients at local stand-ins.
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_api_key: String,
    pub usda_api_key: String,
    pub extractor_url: String,
    pub lookup_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ApiConnectionError> {
        dotenv().ok();
        let hf_api_key = env::var(HF_API_KEY_ENV_VAR)
            .map_err(|_| ApiConnectionError::MissingApiKey(HF_API_KEY_ENV_VAR.to_string()))?;
        let usda_api_key = env::var(USDA_API_KEY_ENV_VAR)
            .map_err(|_| ApiConnectionError::MissingApiKey(USDA_API_KEY_ENV_VAR.to_string()))?;

        Ok(Self {
            hf_api_key,
            usda_api_key,
            extractor_url: DEFAULT_EXTRACTOR_URL.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
        })
    }
}
