use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::api_connection::connection::ApiConnectionError;
use crate::api_connection::extractor::{EntityExtractor, ExtractedToken, FOOD_ENTITY_GROUP};
use crate::api_connection::nutrition::{
    FoodMatch, NutritionLookup, CALORIES_NUTRIENT_NUMBER, PROTEIN_NUTRIENT_NUMBER,
};
use crate::config::Config;

pub const NO_FOOD_MESSAGE: &str = "No food found.";
pub const UNKNOWN_NUTRIENT: &str = "Unknown";

/// One enriched food mention.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FoodResult {
    pub food: String,
    pub calories: String,
    pub protein: String,
}

/// The full outcome of one analysis. `message` is only present for the
/// no-food-detected case, which is a normal result rather than an error.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<FoodResult>,
}

#[derive(Debug)]
pub enum AnalyzeError {
    Extraction(ApiConnectionError),
    Lookup {
        food: String,
        source: ApiConnectionError,
    },
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::Extraction(err) => write!(f, "Entity extraction failed: {}", err),
            AnalyzeError::Lookup { food, source } => {
                write!(f, "Nutrition lookup failed for '{}': {}", food, source)
            }
        }
    }
}

impl Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AnalyzeError::Extraction(err) => Some(err),
            AnalyzeError::Lookup { source, .. } => Some(source),
        }
    }
}

/// Strip the tokenizer's `#` subword continuation markers from a surface word.
pub fn clean_token_word(word: &str) -> String {
    word.chars().filter(|&c| c != '#').collect()
}

/// Cleaned names of FOOD-tagged tokens, deduplicated, first-seen order.
/// Tokens that clean down to an empty string are dropped.
pub fn distinct_food_names(tokens: &[ExtractedToken]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for token in tokens.iter().filter(|t| t.entity_group == FOOD_ENTITY_GROUP) {
        let name = clean_token_word(&token.word);
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }
    names
}

fn nutrient_field(best: Option<&FoodMatch>, number: &str) -> String {
    best.and_then(|m| m.nutrient(number))
        .map(|n| format!("{} {}", n.value, n.unit_name))
        .unwrap_or_else(|| UNKNOWN_NUTRIENT.to_string())
}

fn food_result(food: String, best: Option<&FoodMatch>) -> FoodResult {
    FoodResult {
        calories: nutrient_field(best, CALORIES_NUTRIENT_NUMBER),
        protein: nutrient_field(best, PROTEIN_NUTRIENT_NUMBER),
        food,
    }
}

/// Orchestrates the two upstream calls: NER extraction, then one nutrition
/// lookup per distinct food name. Stateless across requests.
pub struct Analyzer {
    extractor: EntityExtractor,
    lookup: NutritionLookup,
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        Self {
            extractor: EntityExtractor::new(&config.extractor_url, &config.hf_api_key),
            lookup: NutritionLookup::new(&config.lookup_url, &config.usda_api_key),
        }
    }

    /// Analyze one text. A failure in either upstream call aborts the whole
    /// request; there are no partial results.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalyzeError> {
        let tokens = self
            .extractor
            .extract(text)
            .await
            .map_err(AnalyzeError::Extraction)?;

        let names = distinct_food_names(&tokens);
        if names.is_empty() {
            info!("no food entities detected");
            return Ok(AnalysisReport {
                message: Some(NO_FOOD_MESSAGE.to_string()),
                data: Vec::new(),
            });
        }
        debug!(count = names.len(), "looking up nutrition for detected foods");

        // Lookups run one at a time, in detection order.
        let mut data = Vec::with_capacity(names.len());
        for food in names {
            let best = self
                .lookup
                .best_match(&food)
                .await
                .map_err(|source| AnalyzeError::Lookup {
                    food: food.clone(),
                    source,
                })?;
            data.push(food_result(food, best.as_ref()));
        }

        Ok(AnalysisReport {
            message: None,
            data,
        })
    }
}
