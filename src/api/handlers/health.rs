//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, HealthResponse, ReadyComponents, ReadyResponse};
use crate::error::ErrorCode;

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Readiness probe - checks if the storage backend can serve requests.
pub async fn ready(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<ReadyResponse>>) {
    let storage = state.db.storage();
    let storage_ok = match storage.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, backend = storage.backend_name(), "Storage not ready");
            false
        }
    };

    let data = ReadyResponse {
        ready: storage_ok,
        components: ReadyComponents {
            storage: storage_ok,
            backend: storage.backend_name().to_string(),
        },
    };

    if storage_ok {
        (StatusCode::OK, Json(ApiResponse::success(data)))
    } else {
        let response = ApiResponse {
            code: ErrorCode::SERVICE_UNAVAILABLE.as_i32(),
            message: "service unavailable".to_string(),
            data: Some(data),
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    if let Some(handle) = &state.metrics {
        return handle.render();
    }

    let mut output = String::new();
    output.push_str("# HELP placeholder_api_up Whether the service is up\n");
    output.push_str("# TYPE placeholder_api_up gauge\n");
    output.push_str("placeholder_api_up 1\n");
    output
}
