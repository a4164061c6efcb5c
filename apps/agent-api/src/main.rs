use std::sync::Arc;

use axum_helpers::{create_app, health_router, not_found};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_flows::QdrantConfig;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, IndexBackend};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // The vector index is optional: without Qdrant the stub endpoints
    // still serve and index routes answer with an inline error.
    let index = match QdrantConfig::from_env() {
        Ok(qdrant) => {
            info!("Connecting to Qdrant at {}", qdrant.url);
            match IndexBackend::connect(qdrant) {
                Ok(backend) => {
                    info!(
                        "Vector index ready (collection: {})",
                        backend.qdrant.collection
                    );
                    Some(Arc::new(backend))
                }
                Err(e) => {
                    warn!("Failed to initialize Qdrant client: {}", e);
                    None
                }
            }
        }
        Err(e) => {
            warn!("Vector index disabled: {}", e);
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        index,
    };

    let app = api::routes(&state)
        .merge(health_router(config.app))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Agent API shutdown complete");
    Ok(())
}
