//! priorscope-store — Scenario persistence.
//!
//! Best-effort key-value storage of scenarios: an async repository
//! trait with an in-memory implementation here, a JSON-file-backed one
//! in `json_file`, and debounce-coalesced autosave in `autosave`.
//! Missing keys and undecodable payloads surface as absent results,
//! never as a crash.

pub mod autosave;
pub mod json_file;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use priorscope_common::{Result, Scenario};
use tokio::sync::RwLock;
use uuid::Uuid;

pub use autosave::Autosaver;
pub use json_file::JsonFileStore;

/// Scenario repository trait.
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    /// Upsert a scenario by id and point the "current scenario" slot
    /// at it.
    async fn save(&self, scenario: &Scenario) -> Result<()>;

    /// Fetch one scenario; `Ok(None)` when the id is unknown.
    async fn load(&self, id: Uuid) -> Result<Option<Scenario>>;

    /// All saved scenarios.
    async fn list(&self) -> Result<Vec<Scenario>>;

    /// Remove a scenario; unknown ids are a no-op.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// The last-saved scenario, if any. Survives deletion of the
    /// scenario from the list, matching the separate-slot semantics.
    async fn load_current(&self) -> Result<Option<Scenario>>;
}

#[derive(Default)]
struct MemoryInner {
    scenarios: HashMap<Uuid, Scenario>,
    current: Option<Scenario>,
}

/// In-memory store, used as the web default and in tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScenarioStore for MemoryStore {
    async fn save(&self, scenario: &Scenario) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.scenarios.insert(scenario.id, scenario.clone());
        inner.current = Some(scenario.clone());
        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Option<Scenario>> {
        Ok(self.inner.read().await.scenarios.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Scenario>> {
        let inner = self.inner.read().await;
        let mut all: Vec<Scenario> = inner.scenarios.values().cloned().collect();
        all.sort_by_key(|s| s.created_at);
        Ok(all)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.inner.write().await.scenarios.remove(&id);
        Ok(())
    }

    async fn load_current(&self) -> Result<Option<Scenario>> {
        Ok(self.inner.read().await.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use priorscope_common::ids::SequentialIds;
    use priorscope_core::scenario::initial_scenario;

    #[tokio::test]
    async fn save_then_load_round_trip() {
        let store = MemoryStore::new();
        let ids = SequentialIds::default();
        let scenario = initial_scenario(&ids, Utc::now());

        store.save(&scenario).await.unwrap();
        let loaded = store.load(scenario.id).await.unwrap();
        assert_eq!(loaded, Some(scenario));
    }

    #[tokio::test]
    async fn load_unknown_id_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load(Uuid::nil()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_is_upsert() {
        let store = MemoryStore::new();
        let ids = SequentialIds::default();
        let mut scenario = initial_scenario(&ids, Utc::now());
        store.save(&scenario).await.unwrap();

        scenario.name = "Renamed".to_string();
        store.save(&scenario).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Renamed");
    }

    #[tokio::test]
    async fn save_updates_current_slot() {
        let store = MemoryStore::new();
        let ids = SequentialIds::default();
        let a = initial_scenario(&ids, Utc::now());
        let b = initial_scenario(&ids, Utc::now());

        store.save(&a).await.unwrap();
        store.save(&b).await.unwrap();
        assert_eq!(store.load_current().await.unwrap().map(|s| s.id), Some(b.id));
    }

    #[tokio::test]
    async fn delete_removes_from_list_but_not_current() {
        let store = MemoryStore::new();
        let ids = SequentialIds::default();
        let scenario = initial_scenario(&ids, Utc::now());
        store.save(&scenario).await.unwrap();

        store.delete(scenario.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
        // Current slot holds its own copy
        assert!(store.load_current().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_noop() {
        let store = MemoryStore::new();
        store.delete(Uuid::nil()).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
