use serde::{Deserialize, Serialize};

/// One goals row per user; targets are optional and independently settable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthGoals {
    #[serde(default)]
    pub user_id: String,
    pub weight_loss_target: Option<f64>,
    pub muscle_gain_target: Option<f64>,
    pub daily_calorie_target: Option<i64>,
    pub daily_protein_target: Option<i64>,
    pub daily_water_target: Option<i64>,
    pub daily_steps_target: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsQuery {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: Option<HealthGoals>,
}

#[derive(Debug, Serialize)]
pub struct SaveGoalsResponse {
    pub success: bool,
}
