//! Service status endpoints.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub users: &'static str,
    pub symptoms: &'static str,
    pub reports: &'static str,
}

/// `GET /` — welcome body with the endpoint map.
pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {} API", config::APP_NAME),
        endpoints: Endpoints {
            users: "/users",
            symptoms: "/symptoms",
            reports: "/reports",
        },
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health` — liveness check.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
    })
}
