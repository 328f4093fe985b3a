//! Business logic services

pub mod auth;
pub mod checkins;
pub mod export;
pub mod stats;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub checkins: checkins::CheckInService,
    pub stats: stats::StatsService,
    pub export: export::ExportService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        let zone = config.kiosk.zone();
        Self {
            auth: auth::AuthService::new(config.auth.clone()),
            checkins: checkins::CheckInService::new(
                repository.clone(),
                zone,
                config.kiosk.max_group_size,
            ),
            stats: stats::StatsService::new(repository.clone(), zone),
            export: export::ExportService::new(zone),
            repository,
        }
    }
}
