//! Record types exchanged over the REST surface.
//!
//! All wire names are camelCase to match the frontend contract.

pub mod report;
pub mod symptom;
pub mod user;

pub use report::{Report, SymptomSummary, UserDetails};
pub use symptom::{SymptomEntry, SymptomReport};
pub use user::{NewUser, User, UserUpdate};
