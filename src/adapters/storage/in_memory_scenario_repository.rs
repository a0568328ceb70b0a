//! In-Memory Scenario Repository Adapter
//!
//! Keeps one scenario store per planning session in memory.
//! Useful for single-process deployments, testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::PlanningSessionId;
use crate::domain::scenario::ScenarioStore;
use crate::ports::{RepositoryError, ScenarioRepository};

/// In-memory storage for scenario stores
#[derive(Debug, Clone, Default)]
pub struct InMemoryScenarioRepository {
    stores: Arc<RwLock<HashMap<PlanningSessionId, ScenarioStore>>>,
}

impl InMemoryScenarioRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sessions with a saved store
    pub async fn session_count(&self) -> usize {
        self.stores.read().await.len()
    }
}

#[async_trait]
impl ScenarioRepository for InMemoryScenarioRepository {
    async fn load(
        &self,
        session_id: PlanningSessionId,
    ) -> Result<Option<ScenarioStore>, RepositoryError> {
        let stores = self.stores.read().await;
        Ok(stores.get(&session_id).cloned())
    }

    async fn save(
        &self,
        session_id: PlanningSessionId,
        store: &ScenarioStore,
    ) -> Result<(), RepositoryError> {
        let mut stores = self.stores.write().await;
        stores.insert(session_id, store.clone());
        Ok(())
    }

    async fn delete(&self, session_id: PlanningSessionId) -> Result<(), RepositoryError> {
        self.stores.write().await.remove(&session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{calculate, EventParameters};

    fn store_with(names: &[&str]) -> ScenarioStore {
        let mut store = ScenarioStore::new();
        for name in names {
            let params = EventParameters::new("dallas", "meetup", "restaurant");
            let breakdown = calculate(&params);
            store.add(*name, params, breakdown).unwrap();
        }
        store
    }

    #[tokio::test]
    async fn load_missing_session_returns_none() {
        let repo = InMemoryScenarioRepository::new();
        let loaded = repo.load(PlanningSessionId::new()).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let repo = InMemoryScenarioRepository::new();
        let session = PlanningSessionId::new();
        let store = store_with(&["A", "B"]);

        repo.save(session, &store).await.unwrap();
        let loaded = repo.load(session).await.unwrap().unwrap();

        assert_eq!(loaded, store);
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let repo = InMemoryScenarioRepository::new();
        let first = PlanningSessionId::new();
        let second = PlanningSessionId::new();

        repo.save(first, &store_with(&["Only first"])).await.unwrap();

        assert!(repo.load(second).await.unwrap().is_none());
        assert_eq!(repo.load(first).await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn interleaved_writers_keep_last_save_only() {
        let repo = InMemoryScenarioRepository::new();
        let session = PlanningSessionId::new();
        repo.save(session, &store_with(&["Base"])).await.unwrap();

        let mut first = repo.load(session).await.unwrap().unwrap();
        let mut second = repo.load(session).await.unwrap().unwrap();
        let params = EventParameters::new("dallas", "meetup", "restaurant");
        first.add("From first", params.clone(), calculate(&params)).unwrap();
        second.add("From second", params.clone(), calculate(&params)).unwrap();

        repo.save(session, &first).await.unwrap();
        repo.save(session, &second).await.unwrap();

        let loaded = repo.load(session).await.unwrap().unwrap();
        assert_eq!(loaded, second);
        assert_eq!(loaded.len(), 2);
        assert!(loaded.list().iter().all(|s| s.name() != "From first"));
    }

    #[tokio::test]
    async fn delete_removes_store_and_is_idempotent() {
        let repo = InMemoryScenarioRepository::new();
        let session = PlanningSessionId::new();
        repo.save(session, &store_with(&["A"])).await.unwrap();

        repo.delete(session).await.unwrap();
        repo.delete(session).await.unwrap();

        assert!(repo.load(session).await.unwrap().is_none());
        assert_eq!(repo.session_count().await, 0);
    }
}
