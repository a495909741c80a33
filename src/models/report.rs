use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one symptom across the filtered entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomSummary {
    /// Display name — vocabulary identifier with underscores replaced
    /// by spaces ("irregular_periods" → "irregular periods").
    pub symptom: String,
    pub frequency: u32,
    pub average_severity: f64,
    /// Observed severities in encounter order.
    pub original_values: Vec<f64>,
}

/// User measurements echoed into the report, with derived BMI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    /// `weight_kg / (height_cm / 100)^2`, one decimal place.
    /// `None` when either measurement is missing.
    pub bmi: Option<f64>,
}

/// Derived report over a user's entries within a date window.
/// Computed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Millisecond timestamp — reports are ephemeral, so a wall-clock
    /// id is enough to tell two generations apart.
    pub id: i64,
    pub user_id: u32,
    pub user_name: String,
    pub generated_at: DateTime<Utc>,
    /// Human-readable window, e.g. "2025-03-01 to 2025-03-31" or
    /// "All time to present".
    pub period_covered: String,
    pub user_details: UserDetails,
    pub symptom_summary: Vec<SymptomSummary>,
    /// Entries that fell inside the date window.
    pub filtered_symptom_count: usize,
    /// All entries the user has ever recorded.
    pub total_symptom_count: usize,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}
