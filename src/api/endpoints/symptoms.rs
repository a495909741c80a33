//! Symptom entry endpoints.
//!
//! - `GET /symptoms` — every recorded entry
//! - `GET /symptoms/user/:userId` — one user's entries
//! - `POST /symptoms` — record an entry
//! - `GET /symptoms/types` — the recognized vocabulary

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::symptom::DEFAULT_SEVERITY;
use crate::models::{SymptomEntry, SymptomReport};
use crate::store::NewEntry;
use crate::vocabulary::SYMPTOM_TYPES;

/// `GET /symptoms` — all entries across users.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<SymptomEntry>>, ApiError> {
    let entries = ctx.store.list_entries()?;
    Ok(Json(entries))
}

/// `GET /symptoms/user/:userId` — one user's entries, insertion order.
pub async fn for_user(
    State(ctx): State<ApiContext>,
    Path(user_id): Path<u32>,
) -> Result<Json<Vec<SymptomEntry>>, ApiError> {
    // 404 for an unknown user, not an empty list
    ctx.store.get_user(user_id)?;
    let entries = ctx.store.entries_for_user(user_id)?;
    Ok(Json(entries))
}

#[derive(Deserialize)]
pub struct SymptomDetail {
    pub severity: Option<f64>,
}

/// Submission shape. `symptoms` stays untyped until validated so a
/// non-list value yields a 400 with a message rather than a
/// deserialization rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub user_id: Option<u32>,
    pub date: Option<String>,
    pub symptoms: Option<serde_json::Value>,
    pub symptom_details: Option<HashMap<String, SymptomDetail>>,
    pub notes: Option<String>,
}

/// `POST /symptoms` — record a symptom entry.
///
/// Normalizes the submission at this boundary: every symptom becomes
/// a `{name, severity, severityLabel}` object, with the severity
/// taken from `symptomDetails` (default 5) and the label derived.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<SymptomEntry>), ApiError> {
    let (user_id, raw_date, symptoms) = match (req.user_id, req.date, req.symptoms) {
        (Some(user_id), Some(date), Some(symptoms)) => (user_id, date, symptoms),
        _ => {
            return Err(ApiError::BadRequest(
                "userId, date, and symptoms are required".into(),
            ))
        }
    };

    let names = match symptoms.as_array() {
        Some(list) => {
            let mut names = Vec::with_capacity(list.len());
            for value in list {
                match value.as_str() {
                    Some(name) => names.push(name.to_string()),
                    None => {
                        return Err(ApiError::BadRequest(
                            "Symptoms must be an array of symptom names".into(),
                        ))
                    }
                }
            }
            names
        }
        None => return Err(ApiError::BadRequest("Symptoms must be an array".into())),
    };

    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("Invalid date format (expected YYYY-MM-DD)".into()))?;

    let details = req.symptom_details.unwrap_or_default();
    let reports: Vec<SymptomReport> = names
        .into_iter()
        .map(|name| {
            let severity = details
                .get(&name)
                .and_then(|d| d.severity)
                .unwrap_or(DEFAULT_SEVERITY);
            SymptomReport::new(name, severity)
        })
        .collect();

    let entry = ctx.store.create_entry(NewEntry {
        user_id,
        date,
        symptoms: reports,
        notes: req.notes,
    })?;

    tracing::info!(id = entry.id, user_id, "symptom entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /symptoms/types` — the recognized vocabulary.
pub async fn types() -> Json<Vec<&'static str>> {
    Json(SYMPTOM_TYPES.to_vec())
}
