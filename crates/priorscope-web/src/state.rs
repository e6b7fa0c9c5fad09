//! Shared application state for the web server.

use std::sync::Arc;

use priorscope_common::ids::{IdSource, RandomIds};
use priorscope_store::{MemoryStore, ScenarioStore};

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScenarioStore>,
    pub ids: Arc<dyn IdSource>,
    /// Base address used when building share URLs.
    pub share_base: String,
}

impl AppState {
    pub fn new(store: Arc<dyn ScenarioStore>, share_base: impl Into<String>) -> Self {
        Self {
            store,
            ids: Arc::new(RandomIds),
            share_base: share_base.into(),
        }
    }

    /// In-memory state for local runs and tests.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), "http://127.0.0.1:3001")
    }
}

pub type SharedState = Arc<AppState>;
