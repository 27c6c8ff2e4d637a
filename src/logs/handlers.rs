use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::{LogQuery, LogsResponse, SummaryResponse};
use super::services;
use crate::error::AppError;
use crate::state::AppState;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/food-logs", get(list_food_logs))
        .route("/food-logs/summary", get(food_log_summary))
}

#[instrument(skip(state))]
pub async fn list_food_logs(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogsResponse>, AppError> {
    let logs = services::list_food_logs(&state, &query).await?;
    Ok(Json(LogsResponse { logs }))
}

#[instrument(skip(state))]
pub async fn food_log_summary(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let logs = services::list_food_logs(&state, &query).await?;
    let days = services::summarize(&logs);
    Ok(Json(SummaryResponse { days }))
}
