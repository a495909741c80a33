//! API endpoint handlers, one module per resource.

pub mod health;
pub mod reports;
pub mod symptoms;
pub mod users;
