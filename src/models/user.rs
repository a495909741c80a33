use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user. Never deleted in the current scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    /// Height in centimeters.
    pub height: Option<f64>,
    pub registered_date: NaiveDate,
}

/// Validated fields for creating a user. The store assigns the id
/// and stamps `registered_date`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

/// Partial update — `None` means "omitted, keep the prior value".
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}
