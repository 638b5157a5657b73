pub mod handlers;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use emotion_detection::config::DetectorConfig;
use emotion_detection::service::CommonService;
use handlers::{emotion_detector, render_index_page};
use tracing::info;
use tracing_subscriber::EnvFilter;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = DetectorConfig::from_env()?;
    let service = CommonService::new(&config)?;
    let app = build_app(service);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Error binding to {}", address))?;
    info!(listen = %address, api_url = %config.api_url, "emotion detector listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}

pub fn build_app(service: CommonService) -> Router {
    Router::new()
        .route("/", get(render_index_page))
        .route("/emotionDetector", get(emotion_detector))
        .with_state(service)
}
