//! JSON-file-backed scenario store.
//!
//! Two documents under one directory: `scenarios.json` (the full
//! list) and `current.json` (the last-saved scenario). Writes go to a
//! temp file first and are renamed into place. A missing or corrupt
//! document reads as empty/absent with a warning, never an error —
//! storage here is best-effort only.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use priorscope_common::{Result, Scenario};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::ScenarioStore;

const SCENARIOS_FILE: &str = "scenarios.json";
const CURRENT_FILE: &str = "current.json";

pub struct JsonFileStore {
    dir: PathBuf,
    /// Serializes read-modify-write cycles on the list document.
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir, write_lock: Arc::new(Mutex::new(())) })
    }

    fn scenarios_path(&self) -> PathBuf {
        self.dir.join(SCENARIOS_FILE)
    }

    fn current_path(&self) -> PathBuf {
        self.dir.join(CURRENT_FILE)
    }

    /// Read and decode a document; missing or undecodable files come
    /// back as `None`.
    async fn read_doc<T: DeserializeOwned>(path: &Path) -> Option<T> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read store document");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring corrupt store document");
                None
            }
        }
    }

    /// Write a document via temp-file-then-rename.
    async fn write_doc<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_vec_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    async fn read_all(&self) -> Vec<Scenario> {
        Self::read_doc(&self.scenarios_path()).await.unwrap_or_default()
    }
}

#[async_trait]
impl ScenarioStore for JsonFileStore {
    async fn save(&self, scenario: &Scenario) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut all = self.read_all().await;
        match all.iter_mut().find(|s| s.id == scenario.id) {
            Some(existing) => *existing = scenario.clone(),
            None => all.push(scenario.clone()),
        }
        self.write_doc(&self.scenarios_path(), &all).await?;
        self.write_doc(&self.current_path(), scenario).await?;
        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Option<Scenario>> {
        Ok(self.read_all().await.into_iter().find(|s| s.id == id))
    }

    async fn list(&self) -> Result<Vec<Scenario>> {
        Ok(self.read_all().await)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut all = self.read_all().await;
        all.retain(|s| s.id != id);
        self.write_doc(&self.scenarios_path(), &all).await?;
        Ok(())
    }

    async fn load_current(&self) -> Result<Option<Scenario>> {
        Ok(Self::read_doc(&self.current_path()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use priorscope_common::ids::SequentialIds;
    use priorscope_core::scenario::initial_scenario;

    async fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn round_trip_through_disk() {
        let (_dir, store) = temp_store().await;
        let ids = SequentialIds::default();
        let scenario = initial_scenario(&ids, Utc::now());

        store.save(&scenario).await.unwrap();
        assert_eq!(store.load(scenario.id).await.unwrap(), Some(scenario.clone()));
        assert_eq!(store.load_current().await.unwrap(), Some(scenario));
    }

    #[tokio::test]
    async fn empty_store_reads_as_absent() {
        let (_dir, store) = temp_store().await;
        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.load_current().await.unwrap(), None);
        assert_eq!(store.load(Uuid::nil()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_document_is_tolerated_as_empty() {
        let (dir, store) = temp_store().await;
        tokio::fs::write(dir.path().join(SCENARIOS_FILE), b"not json {")
            .await
            .unwrap();
        tokio::fs::write(dir.path().join(CURRENT_FILE), b"[1,2")
            .await
            .unwrap();

        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.load_current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_after_corruption_recovers_the_store() {
        let (dir, store) = temp_store().await;
        tokio::fs::write(dir.path().join(SCENARIOS_FILE), b"garbage")
            .await
            .unwrap();

        let ids = SequentialIds::default();
        let scenario = initial_scenario(&ids, Utc::now());
        store.save(&scenario).await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_persists_across_reopen() {
        let (dir, store) = temp_store().await;
        let ids = SequentialIds::default();
        let a = initial_scenario(&ids, Utc::now());
        let b = initial_scenario(&ids, Utc::now());
        store.save(&a).await.unwrap();
        store.save(&b).await.unwrap();
        store.delete(a.id).await.unwrap();

        let reopened = JsonFileStore::open(dir.path()).await.unwrap();
        let all = reopened.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, b.id);
    }
}
