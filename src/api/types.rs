//! Shared types for the API layer.

use std::sync::Arc;

use crate::store::RecordStore;

/// Shared context for all API routes. Wraps the injected record
/// store; cloning is cheap (one `Arc` bump).
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<RecordStore>,
}

impl ApiContext {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}
