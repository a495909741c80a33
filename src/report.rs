//! Report Aggregator — turns a user's symptom entries into
//! frequency/severity statistics, insights, and recommendations.
//!
//! Pure functions over already-fetched records: the endpoint resolves
//! the user (the only propagated failure) and hands the records in.
//! Generating the same report twice with no intervening writes yields
//! the same statistics.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Report, SymptomEntry, SymptomSummary, User, UserDetails};

/// Average severity at or above which the report recommends
/// consulting a healthcare provider.
const HIGH_SEVERITY_THRESHOLD: f64 = 7.0;

/// Build a report for `user` over `[start, end]` (inclusive calendar
/// days). Filtering only applies when both bounds are present;
/// otherwise every entry is kept.
pub fn build_report(
    user: &User,
    entries: &[SymptomEntry],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Report {
    let filtered: Vec<&SymptomEntry> = match (start, end) {
        (Some(start), Some(end)) => entries
            .iter()
            .filter(|e| start <= e.date && e.date <= end)
            .collect(),
        _ => entries.iter().collect(),
    };

    let summary = summarize(&filtered);

    let insights = if summary.is_empty() {
        vec!["No symptoms recorded in the selected time period.".to_string()]
    } else {
        vec![format!(
            "Your most common symptom is {}.",
            summary[0].symptom
        )]
    };

    let mut recommendations = Vec::new();
    if summary.is_empty() {
        recommendations
            .push("Start recording your symptoms regularly for better insights.".to_string());
    } else {
        recommendations
            .push("Continue tracking your symptoms to identify patterns over time.".to_string());
        if summary
            .iter()
            .any(|s| s.average_severity >= HIGH_SEVERITY_THRESHOLD)
        {
            recommendations.push(
                "Consider consulting with a healthcare provider about your high-severity symptoms."
                    .to_string(),
            );
        }
    }

    let generated_at = Utc::now();

    Report {
        id: generated_at.timestamp_millis(),
        user_id: user.id,
        user_name: user.name.clone(),
        generated_at,
        period_covered: period_covered(start, end),
        user_details: UserDetails {
            age: user.age,
            weight: user.weight,
            height: user.height,
            bmi: bmi(user.weight, user.height),
        },
        symptom_summary: summary,
        filtered_symptom_count: filtered.len(),
        total_symptom_count: entries.len(),
        insights,
        recommendations,
    }
}

/// Accumulate per-symptom statistics and sort by frequency descending.
/// The sort is stable, so ties keep first-encounter order.
fn summarize(entries: &[&SymptomEntry]) -> Vec<SymptomSummary> {
    struct Acc {
        name: String,
        count: u32,
        severity_sum: f64,
        severities: Vec<f64>,
    }

    // Accumulators in first-encounter order
    let mut stats: Vec<Acc> = Vec::new();

    for entry in entries {
        for symptom in &entry.symptoms {
            let idx = match stats.iter().position(|a| a.name == symptom.name) {
                Some(idx) => idx,
                None => {
                    stats.push(Acc {
                        name: symptom.name.clone(),
                        count: 0,
                        severity_sum: 0.0,
                        severities: Vec::new(),
                    });
                    stats.len() - 1
                }
            };
            let acc = &mut stats[idx];
            acc.count += 1;
            acc.severity_sum += symptom.severity;
            acc.severities.push(symptom.severity);
        }
    }

    stats.sort_by(|a, b| b.count.cmp(&a.count));

    stats
        .into_iter()
        .map(|acc| SymptomSummary {
            symptom: acc.name.replace('_', " "),
            frequency: acc.count,
            average_severity: acc.severity_sum / f64::from(acc.count),
            original_values: acc.severities,
        })
        .collect()
}

/// BMI from weight (kg) and height (cm), rounded to one decimal.
pub fn bmi(weight: Option<f64>, height: Option<f64>) -> Option<f64> {
    match (weight, height) {
        (Some(weight), Some(height)) if weight > 0.0 && height > 0.0 => {
            let meters = height / 100.0;
            Some((weight / (meters * meters) * 10.0).round() / 10.0)
        }
        _ => None,
    }
}

/// Parse a calendar day permissively: plain `YYYY-MM-DD` first, then
/// an RFC 3339 datetime truncated to its calendar day. Unparseable
/// input means "no bound".
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

fn period_covered(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let from = start.map_or_else(|| "All time".to_string(), |d| d.to_string());
    let to = end.map_or_else(|| "present".to_string(), |d| d.to_string());
    format!("{from} to {to}")
}
