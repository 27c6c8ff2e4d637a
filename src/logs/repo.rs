use serde::Deserialize;
use time::OffsetDateTime;
use tracing::warn;

use super::dto::FoodLog;
use crate::scan::BreakdownItem;
use crate::store::RecordStore;

/// `food_logs` row as the store returns it (snake_case columns).
#[derive(Debug, Deserialize)]
pub(crate) struct FoodLogRow {
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
    pub breakdown: Option<Vec<BreakdownItem>>,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<FoodLogRow> for FoodLog {
    fn from(r: FoodLogRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            food_name: r.food_name,
            calories: r.calories,
            protein: r.protein,
            carbs: r.carbs,
            fats: r.fats,
            fiber: r.fiber,
            serving_size: r.serving_size,
            confidence: r.confidence,
            breakdown: r.breakdown.unwrap_or_default(),
            image_url: r.image_url,
            created_at: r.created_at,
        }
    }
}

pub(crate) async fn list_by_user(
    store: &dyn RecordStore,
    user_id: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> anyhow::Result<Vec<FoodLogRow>> {
    let mut filters = vec![("user_id", format!("eq.{user_id}"))];
    if let Some(from) = from {
        filters.push(("created_at", format!("gte.{from}")));
    }
    if let Some(to) = to {
        filters.push(("created_at", format!("lte.{to}")));
    }

    let rows = store
        .select("food_logs", &filters, Some("created_at.desc"))
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<FoodLogRow>(row) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(error = %e, "skipping malformed food_logs row");
                None
            }
        })
        .collect())
}
