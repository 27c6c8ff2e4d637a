use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::dto::HealthGoals;
use crate::store::RecordStore;

/// `health_goals` row shape (snake_case columns).
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HealthGoalsRow {
    pub user_id: String,
    pub weight_loss_target: Option<f64>,
    pub muscle_gain_target: Option<f64>,
    pub daily_calorie_target: Option<i64>,
    pub daily_protein_target: Option<i64>,
    pub daily_water_target: Option<i64>,
    pub daily_steps_target: Option<i64>,
}

impl From<HealthGoalsRow> for HealthGoals {
    fn from(r: HealthGoalsRow) -> Self {
        Self {
            user_id: r.user_id,
            weight_loss_target: r.weight_loss_target,
            muscle_gain_target: r.muscle_gain_target,
            daily_calorie_target: r.daily_calorie_target,
            daily_protein_target: r.daily_protein_target,
            daily_water_target: r.daily_water_target,
            daily_steps_target: r.daily_steps_target,
        }
    }
}

impl From<&HealthGoals> for HealthGoalsRow {
    fn from(g: &HealthGoals) -> Self {
        Self {
            user_id: g.user_id.clone(),
            weight_loss_target: g.weight_loss_target,
            muscle_gain_target: g.muscle_gain_target,
            daily_calorie_target: g.daily_calorie_target,
            daily_protein_target: g.daily_protein_target,
            daily_water_target: g.daily_water_target,
            daily_steps_target: g.daily_steps_target,
        }
    }
}

pub(crate) async fn fetch_by_user(
    store: &dyn RecordStore,
    user_id: &str,
) -> anyhow::Result<Option<HealthGoalsRow>> {
    let rows = store
        .select(
            "health_goals",
            &[("user_id", format!("eq.{user_id}"))],
            None,
        )
        .await?;

    Ok(rows
        .into_iter()
        .next()
        .and_then(|row| match serde_json::from_value::<HealthGoalsRow>(row) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(error = %e, "skipping malformed health_goals row");
                None
            }
        }))
}

pub(crate) async fn upsert(store: &dyn RecordStore, row: HealthGoalsRow) -> anyhow::Result<()> {
    let row = serde_json::to_value(&row).context("encode health_goals row")?;
    store.upsert("health_goals", "user_id", row).await
}
