//! API router.
//!
//! Returns a composable `Router` mounting the full REST surface:
//! users, symptom entries, the vocabulary, and report generation.
//! CORS is permissive — the SPA frontend is served from a different
//! origin during development.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints::{health, reports, symptoms, users};
use crate::api::types::ApiContext;
use crate::store::RecordStore;

/// Build the API router around an injected record store.
pub fn api_router(store: Arc<RecordStore>) -> Router {
    let ctx = ApiContext::new(store);

    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::check))
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::detail).put(users::update))
        .route("/symptoms", get(symptoms::list).post(symptoms::create))
        .route("/symptoms/user/:user_id", get(symptoms::for_user))
        .route("/symptoms/types", get(symptoms::types))
        .route("/reports/user/:user_id/range", get(reports::range))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
