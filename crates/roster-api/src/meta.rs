use axum::Json;
use chrono::{SecondsFormat, Utc};

use roster_types::api::{HealthResponse, RootResponse, SERVICE_VERSION};

use crate::error::ApiError;

/// GET / — service description and endpoint list.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}

/// GET /health — never touches the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        version: SERVICE_VERSION.into(),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
