use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fallback severity when a submission names a symptom without details.
pub const DEFAULT_SEVERITY: f64 = 5.0;

/// One symptom observation inside an entry, normalized at the
/// ingestion boundary: always a name plus a numeric severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    pub name: String,
    /// Severity on a 1–10 scale.
    pub severity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_label: Option<String>,
}

impl SymptomReport {
    /// Build a report with the label derived from the severity.
    pub fn new(name: String, severity: f64) -> Self {
        Self {
            name,
            severity,
            severity_label: Some(severity_label(severity).to_string()),
        }
    }
}

/// One submitted record of symptoms for a user on a given date.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomEntry {
    pub id: u32,
    pub user_id: u32,
    pub date: NaiveDate,
    pub symptoms: Vec<SymptomReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Display label for a 1–10 severity value.
pub fn severity_label(severity: f64) -> &'static str {
    if severity <= 2.0 {
        "very mild"
    } else if severity <= 4.0 {
        "mild"
    } else if severity <= 6.0 {
        "moderate"
    } else if severity <= 8.0 {
        "severe"
    } else {
        "very severe"
    }
}
