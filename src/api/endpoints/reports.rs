//! Report endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Report;
use crate::report;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `GET /reports/user/:userId/range?startDate&endDate` — aggregate a
/// user's entries over an inclusive date window.
///
/// An unknown user is the only failure; missing or unparseable bounds
/// just widen the range.
pub async fn range(
    State(ctx): State<ApiContext>,
    Path(user_id): Path<u32>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Report>, ApiError> {
    let user = ctx.store.get_user(user_id)?;
    let entries = ctx.store.entries_for_user(user_id)?;

    let start = query.start_date.as_deref().and_then(report::parse_day);
    let end = query.end_date.as_deref().and_then(report::parse_day);

    let report = report::build_report(&user, &entries, start, end);

    tracing::debug!(
        user_id,
        filtered = report.filtered_symptom_count,
        total = report.total_symptom_count,
        "report generated"
    );

    Ok(Json(report))
}
