//! Recognized symptom vocabulary and the validation layer over it.
//!
//! The vocabulary is a process-wide constant: submissions naming a
//! symptom outside this set are rejected whole, with the offending
//! subset reported back to the client.

/// Common PCOS symptoms accepted by the tracker, in the order they
/// are served to clients by `GET /symptoms/types`.
pub const SYMPTOM_TYPES: &[&str] = &[
    "irregular_periods",
    "heavy_bleeding",
    "weight_gain",
    "acne",
    "hair_loss",
    "excess_hair_growth",
    "mood_changes",
    "fatigue",
    "pelvic_pain",
    "headaches",
    "sleep_problems",
    "insulin_resistance",
    "bloating",
];

/// Membership test against the fixed vocabulary. The match compiles
/// to a static lookup, so this does not scan the list.
pub fn is_recognized(name: &str) -> bool {
    matches!(
        name,
        "irregular_periods"
            | "heavy_bleeding"
            | "weight_gain"
            | "acne"
            | "hair_loss"
            | "excess_hair_growth"
            | "mood_changes"
            | "fatigue"
            | "pelvic_pain"
            | "headaches"
            | "sleep_problems"
            | "insulin_resistance"
            | "bloating"
    )
}

/// Validate a batch of symptom names. Pure — returns `Err` with the
/// unrecognized subset (in submission order) when any name is unknown.
pub fn validate_symptom_names<S: AsRef<str>>(names: &[S]) -> Result<(), Vec<String>> {
    let invalid: Vec<String> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !is_recognized(name))
        .map(str::to_string)
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(invalid)
    }
}
