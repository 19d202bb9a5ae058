use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use chat_relay::config::Config;
use chat_relay::routes;
use chat_relay::services::gemini::GeminiGateway;
use chat_relay::state::AppState;

const REAP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_relay=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let gateway = Arc::new(GeminiGateway::new(
        config.api_key.clone(),
        config.model.clone(),
        &config.gemini_base_url,
    ));
    let state = Arc::new(AppState::new(
        config.session_ttl,
        gateway,
        config.manual_path.clone(),
    ));
    state.sessions.spawn_reaper(REAP_INTERVAL);

    let origin = HeaderValue::from_str(&config.cors_origin)
        .with_context(|| format!("CORS_ORIGIN is not a valid header value: {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        model = %config.model,
        manual = %config.manual_path.display(),
        "chat relay listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
