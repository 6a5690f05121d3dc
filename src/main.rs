use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use vetai::api::{ai_router, ApiContext, InMemoryAnimalDirectory};
use vetai::config::{default_log_filter, DiagnosticConfig, APP_NAME, APP_VERSION};
use vetai::pipeline::DiagnosticService;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_filter().into()),
        )
        .init();

    let config = Arc::new(DiagnosticConfig::from_env());
    tracing::info!(
        app = APP_NAME,
        version = APP_VERSION,
        model = %config.model,
        configured = config.is_configured(),
        "starting"
    );
    if !config.is_configured() {
        tracing::warn!("OPENAI_API_KEY not set; all diagnoses will use demo fallback results");
    }

    let service = DiagnosticService::from_config(config);
    let ctx = ApiContext {
        service: Arc::new(service),
        animals: Arc::new(InMemoryAnimalDirectory::new()),
    };

    let app = ai_router(ctx)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = std::env::var("VETAI_BIND").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
