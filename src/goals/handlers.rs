use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{GoalsQuery, GoalsResponse, HealthGoals, SaveGoalsResponse};
use super::repo;
use crate::error::AppError;
use crate::state::AppState;

pub fn goals_routes() -> Router<AppState> {
    Router::new().route("/health-goals", get(get_goals).put(put_goals))
}

#[instrument(skip(state))]
pub async fn get_goals(
    State(state): State<AppState>,
    Query(query): Query<GoalsQuery>,
) -> Result<Json<GoalsResponse>, AppError> {
    let store = state
        .store
        .as_ref()
        .ok_or(AppError::Configuration("record store"))?;

    if query.user_id.is_empty() {
        return Err(AppError::Input("userId is required"));
    }

    let goals = repo::fetch_by_user(store.as_ref(), &query.user_id)
        .await?
        .map(HealthGoals::from);

    Ok(Json(GoalsResponse { goals }))
}

#[instrument(skip(state, body))]
pub async fn put_goals(
    State(state): State<AppState>,
    Json(body): Json<HealthGoals>,
) -> Result<Json<SaveGoalsResponse>, AppError> {
    let store = state
        .store
        .as_ref()
        .ok_or(AppError::Configuration("record store"))?;

    if body.user_id.is_empty() {
        return Err(AppError::Input("userId is required"));
    }

    repo::upsert(store.as_ref(), (&body).into()).await?;
    info!(user_id = %body.user_id, "health goals saved");

    Ok(Json(SaveGoalsResponse { success: true }))
}
