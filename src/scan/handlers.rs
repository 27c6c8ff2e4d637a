use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, instrument};

use super::dto::{AnalyzeRequest, IdentifyRequest, IdentifyResponse, NutritionAnalysis};
use super::services;
use crate::error::AppError;
use crate::state::AppState;

pub fn scan_routes() -> Router<AppState> {
    Router::new()
        .route("/identify-dish", post(identify_dish))
        .route("/analyze-food", post(analyze_food))
}

/// This endpoint's failure envelope carries `success: false`, so errors are
/// mapped here instead of through `AppError`'s response impl.
#[instrument(skip(state, body))]
pub async fn identify_dish(
    State(state): State<AppState>,
    Json(body): Json<IdentifyRequest>,
) -> Response {
    match services::identify_dish(&state, &body.image_data).await {
        Ok(dish_info) => {
            info!(dish = %dish_info.dish_name, "dish identified");
            Json(IdentifyResponse {
                success: true,
                dish_info,
            })
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "identify-dish failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[instrument(skip(state, body))]
pub async fn analyze_food(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<NutritionAnalysis>, AppError> {
    let analysis =
        services::analyze_food(&state, &body.image_data, body.user_id.as_deref()).await?;
    Ok(Json(analysis))
}
