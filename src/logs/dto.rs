use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::scan::BreakdownItem;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    #[serde(default)]
    pub user_id: String,
    /// Inclusive RFC 3339 bounds on the log's creation time.
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Read model of one persisted analysis. Nutrition fields mirror the store's
/// nullable columns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLog {
    pub id: String,
    pub user_id: Option<String>,
    pub food_name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
    pub fiber: Option<f64>,
    pub serving_size: Option<String>,
    pub confidence: Option<f64>,
    pub breakdown: Vec<BreakdownItem>,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// Calendar day (`YYYY-MM-DD`) of the logs' creation time.
    pub date: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub entries: usize,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<FoodLog>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub days: Vec<DailySummary>,
}
