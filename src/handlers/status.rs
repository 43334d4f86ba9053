// src/handlers/status.rs
use axum::{extract::State, http::StatusCode, Json};

use crate::dtos::response::{ApiResponse, StatusInfo};
use crate::state::AppState;

// GET / - service status, answers regardless of method
pub async fn home(State(AppState { data_source }): State<AppState>) -> Json<ApiResponse> {
    let info = StatusInfo {
        database: data_source.status_label().to_string(),
        endpoints: "GET /api/products, GET /api/products/{id}".to_string(),
    };
    Json(ApiResponse::status("Products API is running", info))
}

// Method fallback for the API routes
pub async fn method_not_allowed() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiResponse::failure(
            "Method not allowed",
            Some("Only GET method is allowed".to_string()),
        )),
    )
}
