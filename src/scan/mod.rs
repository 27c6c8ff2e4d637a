mod dto;
mod extract;
pub mod handlers;
mod prompts;
pub mod services;

pub use dto::{AnalyzeRequest, BreakdownItem, DishConfidence, DishInfo, IdentifyRequest, NutritionAnalysis};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::scan_routes())
}
