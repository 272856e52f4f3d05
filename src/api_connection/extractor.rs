use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::connection::ApiConnectionError;

/// Entity group label the NER model assigns to food mentions.
pub const FOOD_ENTITY_GROUP: &str = "FOOD";

/// One labeled token span from the inference endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractedToken {
    pub entity_group: String,
    pub word: String,
    pub score: f32,
    pub start: usize,
    pub end: usize,
}

/// Client for the hosted token-classification model.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl EntityExtractor {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Send the raw text to the model and return its token spans.
    pub async fn extract(&self, text: &str) -> Result<Vec<ExtractedToken>, ApiConnectionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        if response.status().is_success() {
            let tokens = response.json::<Vec<ExtractedToken>>().await?;
            Ok(tokens)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }
}
