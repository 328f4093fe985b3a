//! Check-in service: ticket numbering and the visit log

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    error::AppResult,
    models::{CheckInRequest, KioskZone, ResetState, Visit, VisitFilter},
    repository::Repository,
};

#[derive(Clone)]
pub struct CheckInService {
    repository: Repository,
    zone: KioskZone,
    max_group_size: u32,
    // Serialises the read-modify-write of the two records
    write_lock: Arc<Mutex<()>>,
}

impl CheckInService {
    pub fn new(repository: Repository, zone: KioskZone, max_group_size: u32) -> Self {
        Self {
            repository,
            zone,
            max_group_size,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Register a visit now
    pub async fn check_in(&self, request: &CheckInRequest) -> AppResult<Visit> {
        self.check_in_at(Utc::now(), request).await
    }

    /// Register a visit at the given instant
    pub async fn check_in_at(&self, now: DateTime<Utc>, request: &CheckInRequest) -> AppResult<Visit> {
        let (group_size, group_info) = request.normalized(self.max_group_size)?;

        let _guard = self.write_lock.lock().await;

        let mut visits = self.repository.visits.list().await?;
        let state = self.repository.visits.reset_state().await?;

        let (state, numbers) = state.advance(self.zone, now, group_size);
        let visit = Visit::new(
            request.category,
            request.location,
            now,
            numbers,
            group_info,
            group_size,
        );

        visits.insert(0, visit.clone());
        self.repository.visits.save(&visits, &state).await?;

        tracing::info!(
            "Check-in {} at {} ({} x{}): daily #{} weekly #{} monthly #{} yearly #{}",
            visit.id,
            visit.location,
            visit.category,
            visit.group_size,
            visit.daily_number,
            visit.weekly_number,
            visit.monthly_number,
            visit.yearly_number
        );

        Ok(visit)
    }

    /// Visits matching the filter, newest first
    pub async fn list(&self, filter: &VisitFilter) -> AppResult<Vec<Visit>> {
        let visits = self.repository.visits.list().await?;
        Ok(visits
            .into_iter()
            .filter(|v| filter.matches(v, self.zone))
            .collect())
    }

    /// Counters as they stand now, with any due resets applied (not persisted)
    pub async fn current_counters(&self) -> AppResult<ResetState> {
        self.current_counters_at(Utc::now()).await
    }

    pub async fn current_counters_at(&self, now: DateTime<Utc>) -> AppResult<ResetState> {
        let state = self.repository.visits.reset_state().await?;
        Ok(state.rolled_to(self.zone, now))
    }

    /// Erase the visit log and the counters
    pub async fn clear_all(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.repository.visits.clear().await?;
        tracing::warn!("All visit data cleared");
        Ok(())
    }
}
