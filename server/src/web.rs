use crate::server::AppState;
use axum::{extract::State, Json};
use botdo_shared::{ApiIndex, HealthReport, RootMessage, API_VERSION};
use std::collections::BTreeMap;

pub const ROOT_MESSAGE: &str = "Hello World from BotDO Backend!";
const SERVICE_NAME: &str = "BotDO Backend";

/// `GET /`, the endpoint the status screen probes
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: ROOT_MESSAGE.to_string(),
        status: Some("running".to_string()),
        version: Some(API_VERSION.to_string()),
    })
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        environment: state.config.environment.clone(),
        integrations: state.config.integrations.clone(),
    })
}

/// `GET /api/test`
pub async fn api_test() -> Json<ApiIndex> {
    let endpoints = [("root", "/"), ("health", "/health"), ("test", "/api/test")]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect::<BTreeMap<_, _>>();

    Json(ApiIndex {
        message: "Backend API is working correctly!".to_string(),
        endpoints,
    })
}
