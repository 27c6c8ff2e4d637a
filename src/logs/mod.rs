mod dto;
pub mod handlers;
mod repo;
pub mod services;

pub use dto::{DailySummary, FoodLog, LogQuery};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::log_routes())
}
