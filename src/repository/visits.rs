//! Visits repository: the visit log and the reset counters

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use super::store::KeyValueStore;
use crate::{
    error::{AppError, AppResult},
    models::{ResetState, Visit},
};

pub const VISITS_KEY: &str = "artemis_visits_v2";
pub const RESET_STATE_KEY: &str = "artemis_reset_state_v2";

#[derive(Clone)]
pub struct VisitsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl VisitsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All visits, newest first. A missing or unreadable record reads as empty.
    pub async fn list(&self) -> AppResult<Vec<Visit>> {
        self.load(VISITS_KEY).await
    }

    /// Stored counters, or the initial state if none are stored yet
    pub async fn reset_state(&self) -> AppResult<ResetState> {
        self.load(RESET_STATE_KEY).await
    }

    /// Rewrite both records in full.
    ///
    /// The counters go first: if the log write then fails, the lost visit
    /// leaves a gap in the numbering instead of a repeated number.
    pub async fn save(&self, visits: &[Visit], state: &ResetState) -> AppResult<()> {
        self.store
            .set_many(&[
                (RESET_STATE_KEY, encode(state)?),
                (VISITS_KEY, encode(visits)?),
            ])
            .await
    }

    /// Delete the visit log and the counters
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(VISITS_KEY).await?;
        self.store.remove(RESET_STATE_KEY).await?;
        Ok(())
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    async fn load<T: DeserializeOwned + Default>(&self, key: &str) -> AppResult<T> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(T::default());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!("Stored record '{}' is unreadable, treating it as empty: {}", key, e);
                Ok(T::default())
            }
        }
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize record: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::visit::fixtures::visit;
    use crate::models::{Location, VisitorCategory};
    use crate::repository::store::{KeyValueStore, MemoryStore};

    #[tokio::test]
    async fn test_empty_store_reads_as_initial_state() {
        let repo = VisitsRepository::new(Arc::new(MemoryStore::new()));
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.reset_state().await.unwrap(), ResetState::default());
    }

    #[tokio::test]
    async fn test_corrupted_records_read_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(VISITS_KEY, "{not json").await.unwrap();
        store.set(RESET_STATE_KEY, "[1, 2, 3]").await.unwrap();

        let repo = VisitsRepository::new(store);
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.reset_state().await.unwrap(), ResetState::default());
    }

    #[tokio::test]
    async fn test_save_and_clear() {
        let repo = VisitsRepository::new(Arc::new(MemoryStore::new()));
        let visits = vec![
            visit(VisitorCategory::Visitor, Location::Museum, "2025-03-13T11:00:00Z", 1),
            visit(VisitorCategory::Student, Location::ArtsGallery, "2025-03-13T10:00:00Z", 1),
        ];
        let mut state = ResetState::default();
        state.daily.count = 2;

        repo.save(&visits, &state).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), visits);
        assert_eq!(repo.reset_state().await.unwrap().daily.count, 2);

        repo.clear().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.reset_state().await.unwrap(), ResetState::default());
    }
}
