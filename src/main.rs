use nutrisnap::app::{build_app, serve};
use nutrisnap::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "nutrisnap=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init()?;
    if state.vision.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; scan endpoints will fail until it is");
    }
    if state.store.is_none() {
        tracing::warn!("record store is not configured; food logs will not be persisted");
    }

    let app = build_app(state);
    serve(app).await
}
