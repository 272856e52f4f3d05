use reqwest::Client;
use serde::Deserialize;

use super::connection::ApiConnectionError;

/// Database nutrient number for energy in kcal.
pub const CALORIES_NUTRIENT_NUMBER: &str = "208";
/// Database nutrient number for protein.
pub const PROTEIN_NUTRIENT_NUMBER: &str = "203";

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrient {
    pub nutrient_number: String,
    pub value: f64,
    pub unit_name: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FoodMatch {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
}

impl FoodMatch {
    pub fn nutrient(&self, number: &str) -> Option<&FoodNutrient> {
        self.food_nutrients
            .iter()
            .find(|n| n.nutrient_number == number)
    }
}

#[derive(Debug, Deserialize)]
struct FoodSearchResponse {
    #[serde(default)]
    foods: Vec<FoodMatch>,
}

/// Client for the food-database search endpoint.
#[derive(Debug, Clone)]
pub struct NutritionLookup {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl NutritionLookup {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Search the database for `food`, returning the single best match if any.
    pub async fn best_match(&self, food: &str) -> Result<Option<FoodMatch>, ApiConnectionError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", food),
                ("api_key", self.api_key.as_str()),
                ("pageSize", "1"),
            ])
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.json::<FoodSearchResponse>().await?;
            Ok(body.foods.into_iter().next())
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
