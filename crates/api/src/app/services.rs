//! Shared service state handed to request handlers.

use std::sync::Arc;

use stocktrack_infra::{InMemoryRecordStore, RecordStore};

/// Application services available to request handlers.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn RecordStore>,
}

impl AppServices {
    /// In-memory wiring: records live for the process lifetime.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(InMemoryRecordStore::new()),
        }
    }

    pub fn store(&self) -> &dyn RecordStore {
        &*self.store
    }
}
