/// HTTP server shell
///
/// Builds the Axum application from resolved settings and serves it. Route
/// handlers live with their feature modules; this shell wires the health
/// check and the CORS policy derived from the settings.

use crate::config::Settings;
use anyhow::Result;
use axum::{http::HeaderValue, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create the main Axum application
pub fn create_app(settings: &Settings) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .layer(cors_layer(&settings.cors_origins))
}

/// CORS policy from the resolved allow-list
///
/// A "*" entry means any origin; otherwise the parseable entries are
/// allow-listed (unparseable ones are skipped with a warning, in keeping
/// with the lenient configuration contract).
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("skipping unparseable CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the HTTP server with the given settings
///
/// Binds the configured address and serves until shutdown.
pub async fn start_server(settings: Settings) -> Result<()> {
    let app = create_app(&settings);

    let bind_addr = format!("{}:{}", settings.api_host, settings.api_port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("🚀 {} listening on http://{}", settings.app_name, bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
