use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyRequest {
    /// Forwarded to the model as-is; this endpoint does not validate it.
    #[serde(default)]
    pub image_data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image_data: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionAnalysis {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub serving_size: String,
    pub confidence: f64,
    pub breakdown: Vec<BreakdownItem>,
}

/// Ingredient-level contribution. Percentages come straight from the model
/// and are not normalized; they need not sum to 100.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BreakdownItem {
    pub name: String,
    pub percentage: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishInfo {
    pub dish_name: String,
    #[serde(default)]
    pub alternative_names: Vec<String>,
    #[serde(default)]
    pub main_ingredients: Vec<String>,
    #[serde(default)]
    pub serving_size: String,
    pub confidence: DishConfidence,
    /// Only set on the degraded path, carrying the model's unparsed text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishConfidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyResponse {
    pub success: bool,
    pub dish_info: DishInfo,
}
