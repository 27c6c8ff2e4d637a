mod dto;
pub mod handlers;
mod repo;

pub use dto::HealthGoals;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::goals_routes())
}
