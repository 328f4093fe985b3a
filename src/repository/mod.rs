//! Repository layer over the kiosk's key-value store

pub mod redis_store;
pub mod store;
pub mod visits;

use std::sync::Arc;

use crate::{
    config::{StorageBackend, StorageConfig},
    error::AppResult,
};

pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Main repository struct holding the record repositories
#[derive(Clone)]
pub struct Repository {
    pub visits: visits::VisitsRepository,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            visits: visits::VisitsRepository::new(store),
        }
    }
}

/// Open the store selected in configuration
pub async fn open_store(config: &StorageConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::File => Arc::new(FileStore::open(&config.data_dir).await?),
        StorageBackend::Redis => {
            Arc::new(redis_store::RedisStore::new(&config.redis_url, &config.key_prefix).await?)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, visits will be lost on restart");
            Arc::new(MemoryStore::new())
        }
    };
    Ok(store)
}
