//! Artemis Visitor Check-in
//!
//! Kiosk server for a museum and arts gallery: visitors check themselves in
//! and receive daily, weekly, monthly and yearly ticket numbers; staff read
//! dashboard statistics and export the visit log as CSV.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{KeyValueStore, Repository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire repository and services over an opened store
    pub fn new(config: &AppConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let repository = Repository::new(store);
        Self {
            services: Arc::new(services::Services::new(repository, config)),
        }
    }
}
