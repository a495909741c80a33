//! User endpoints.
//!
//! - `GET /users` — all registered users
//! - `GET /users/:id` — single user
//! - `POST /users` — register a user
//! - `PUT /users/:id` — partial update

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{NewUser, User, UserUpdate};

/// `GET /users` — list all users.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<User>>, ApiError> {
    let users = ctx.store.list_users()?;
    Ok(Json(users))
}

/// `GET /users/:id` — fetch one user.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<u32>,
) -> Result<Json<User>, ApiError> {
    let user = ctx.store.get_user(id)?;
    Ok(Json(user))
}

/// Fields are all optional at the wire level so missing required
/// fields surface as a 400 with a message, not a deserialization
/// rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

/// `POST /users` — register a user.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (name, email) = match (req.name, req.email) {
        (Some(name), Some(email)) if !name.trim().is_empty() && !email.trim().is_empty() => {
            (name, email)
        }
        _ => return Err(ApiError::BadRequest("Name and email are required".into())),
    };

    let user = ctx.store.create_user(NewUser {
        name,
        email,
        age: req.age,
        weight: req.weight,
        height: req.height,
    })?;

    tracing::info!(id = user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

/// `PUT /users/:id` — partial update; omitted fields keep their
/// prior values.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<u32>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = ctx.store.update_user(
        id,
        UserUpdate {
            name: req.name,
            email: req.email,
            age: req.age,
            weight: req.weight,
            height: req.height,
        },
    )?;

    Ok(Json(user))
}
