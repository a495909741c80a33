//! In-memory record store for users and symptom entries.
//!
//! The store is the single shared state of the service. It is injected
//! through the API context (wrapped in `Arc`) rather than living in a
//! process-wide global, so tests construct their own isolated instance.
//!
//! Uses `RwLock` for concurrent read access; read-modify-write
//! sequences (id assignment, duplicate-email checks) hold the write
//! lock for the whole operation, which preserves the uniqueness
//! invariants under axum's concurrent request handling.

use std::sync::RwLock;

use chrono::{NaiveDate, Utc};

use crate::models::{NewUser, SymptomEntry, SymptomReport, User, UserUpdate};
use crate::vocabulary;

/// Failures surfaced by store operations. All are terminal for the
/// request; a failed operation records no side effects.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User not found")]
    UserNotFound,
    #[error("User with this email already exists")]
    DuplicateEmail,
    #[error("Email already in use by another user")]
    EmailTaken,
    #[error("Some symptoms are not recognized")]
    UnrecognizedSymptoms { invalid: Vec<String> },
    #[error("lock poisoned")]
    LockPoisoned,
}

/// Fields accepted for a new symptom entry. The store assigns the id
/// and stamps `created_at`.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: u32,
    pub date: NaiveDate,
    pub symptoms: Vec<SymptomReport>,
    pub notes: Option<String>,
}

/// In-memory record store. Users are never deleted; entries are
/// immutable once created.
pub struct RecordStore {
    users: RwLock<Vec<User>>,
    entries: RwLock<Vec<SymptomEntry>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            entries: RwLock::new(Vec::new()),
        }
    }

    // ── Users ───────────────────────────────────────────────

    /// Create a user. Fails with `DuplicateEmail` when the email is
    /// already registered, leaving the store unchanged.
    pub fn create_user(&self, fields: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;

        if users.iter().any(|u| u.email == fields.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: next_id(users.iter().map(|u| u.id)),
            name: fields.name,
            email: fields.email,
            age: fields.age,
            weight: fields.weight,
            height: fields.height,
            registered_date: Utc::now().date_naive(),
        };

        tracing::debug!(id = user.id, "user created");
        users.push(user.clone());
        Ok(user)
    }

    /// Partial update. Omitted fields keep their prior values. Fails
    /// with `EmailTaken` when the new email belongs to a different user.
    pub fn update_user(&self, id: u32, update: UserUpdate) -> Result<User, StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;

        if let Some(email) = &update.email {
            if users.iter().any(|u| u.email == *email && u.id != id) {
                return Err(StoreError::EmailTaken);
            }
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound)?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(age) = update.age {
            user.age = Some(age);
        }
        if let Some(weight) = update.weight {
            user.weight = Some(weight);
        }
        if let Some(height) = update.height {
            user.height = Some(height);
        }

        tracing::debug!(id, "user updated");
        Ok(user.clone())
    }

    pub fn get_user(&self, id: u32) -> Result<User, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::UserNotFound)
    }

    pub fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.clone())
    }

    // ── Symptom entries ─────────────────────────────────────

    /// Create a symptom entry. The whole entry is rejected when the
    /// user is unknown or any symptom name falls outside the
    /// recognized vocabulary — no partial acceptance.
    pub fn create_entry(&self, fields: NewEntry) -> Result<SymptomEntry, StoreError> {
        self.get_user(fields.user_id)?;

        let names: Vec<&str> = fields.symptoms.iter().map(|s| s.name.as_str()).collect();
        vocabulary::validate_symptom_names(&names)
            .map_err(|invalid| StoreError::UnrecognizedSymptoms { invalid })?;

        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;

        let entry = SymptomEntry {
            id: next_id(entries.iter().map(|e| e.id)),
            user_id: fields.user_id,
            date: fields.date,
            symptoms: fields.symptoms,
            notes: fields.notes,
            created_at: Utc::now(),
        };

        tracing::debug!(id = entry.id, user_id = entry.user_id, "symptom entry recorded");
        entries.push(entry.clone());
        Ok(entry)
    }

    /// All entries for a user, in insertion order.
    pub fn entries_for_user(&self, user_id: u32) -> Result<Vec<SymptomEntry>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    pub fn list_entries(&self) -> Result<Vec<SymptomEntry>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.clone())
    }

    // ── Seed data ───────────────────────────────────────────

    /// Load the demo users the frontend expects on a fresh start.
    /// Skipped silently if their emails are already registered.
    pub fn seed_demo_users(&self) {
        let demo = [
            ("Sarah Johnson", "sarah.j@example.com", 28, 50.0, 165.0),
            ("Emily Wilson", "emily.w@example.com", 32, 70.0, 170.0),
            ("Jessica Brown", "jessica.b@example.com", 26, 70.0, 160.0),
        ];

        for (name, email, age, weight, height) in demo {
            let _ = self.create_user(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                age: Some(age),
                weight: Some(weight),
                height: Some(height),
            });
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Next sequential id: `max(existing) + 1`, or 1 when empty.
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}
