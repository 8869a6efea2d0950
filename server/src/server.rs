use crate::config::{Config, CorsOrigins};
use crate::web;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = config.addr();
    let app = build_router(config);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Routes plus tracing and CORS layers
pub fn build_router(config: Config) -> Router {
    let cors = cors_layer(&config.cors_origins);
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(web::root))
        .route("/health", get(web::health))
        .route("/api/test", get(web::api_test))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::permissive(),
        CorsOrigins::List(list) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(list.clone()))
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
