//! Visit model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::{
    enums::{Lang, Location, VisitorCategory},
    period::KioskZone,
    reset_state::TicketNumbers,
};
use crate::error::{AppError, AppResult};

fn default_group_size() -> u32 {
    1
}

/// One check-in event. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Visit {
    pub id: Uuid,
    pub category: VisitorCategory,
    pub location: Location,
    pub timestamp: DateTime<Utc>,
    /// Ticket number within the day
    pub daily_number: u32,
    pub weekly_number: u32,
    pub monthly_number: u32,
    pub yearly_number: u32,
    /// Group name or school, lawatan visits only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_info: Option<String>,
    /// Number of people this record stands for
    #[serde(default = "default_group_size")]
    pub group_size: u32,
}

impl Visit {
    pub fn new(
        category: VisitorCategory,
        location: Location,
        timestamp: DateTime<Utc>,
        numbers: TicketNumbers,
        group_info: Option<String>,
        group_size: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            location,
            timestamp,
            daily_number: numbers.daily,
            weekly_number: numbers.weekly,
            monthly_number: numbers.monthly,
            yearly_number: numbers.yearly,
            group_info,
            group_size,
        }
    }

    /// Zero-padded daily number printed on the kiosk ticket
    pub fn ticket_label(&self) -> String {
        format!("{:03}", self.daily_number)
    }
}

/// Check-in request sent by the kiosk
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CheckInRequest {
    pub category: VisitorCategory,
    pub location: Location,
    #[validate(length(max = 200, message = "Group info must be at most 200 characters"))]
    pub group_info: Option<String>,
    #[validate(range(min = 1, message = "Group size must be at least 1"))]
    pub group_size: Option<u32>,
}

impl CheckInRequest {
    pub fn new(category: VisitorCategory, location: Location) -> Self {
        Self {
            category,
            location,
            group_info: None,
            group_size: None,
        }
    }

    /// Validate against the kiosk limits, returning the group size and cleaned group info
    pub fn normalized(&self, max_group_size: u32) -> AppResult<(u32, Option<String>)> {
        self.validate()?;

        let group_size = self.group_size.unwrap_or(1);
        if group_size > max_group_size {
            return Err(AppError::Validation(format!(
                "Group size must be at most {}",
                max_group_size
            )));
        }
        if group_size != 1 && !self.category.is_group() {
            return Err(AppError::Validation(format!(
                "Only lawatan check-ins may register more than one person (got {} for {})",
                group_size, self.category
            )));
        }

        let group_info = self
            .group_info
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok((group_size, group_info))
    }
}

/// Query parameters shared by history, export and statistics
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct VisitQuery {
    /// Only visits at this location
    pub location: Option<Location>,
    /// Only visits of this category
    pub category: Option<VisitorCategory>,
    /// First day, inclusive (YYYY-MM-DD, kiosk time)
    pub start_date: Option<String>,
    /// Last day, inclusive (YYYY-MM-DD, kiosk time)
    pub end_date: Option<String>,
    /// Label language (en, ms)
    pub lang: Option<Lang>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl VisitQuery {
    pub fn filter(&self) -> AppResult<VisitFilter> {
        let start_date = self.start_date.as_deref().map(parse_date).transpose()?;
        let end_date = self.end_date.as_deref().map(parse_date).transpose()?;

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(AppError::BadRequest(format!(
                    "start_date {} is after end_date {}",
                    start, end
                )));
            }
        }

        Ok(VisitFilter {
            location: self.location,
            category: self.category,
            start_date,
            end_date,
        })
    }
}

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Selection of visits by venue, category and calendar range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitFilter {
    pub location: Option<Location>,
    pub category: Option<VisitorCategory>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl VisitFilter {
    pub fn at(location: Option<Location>) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    pub fn matches(&self, visit: &Visit, zone: KioskZone) -> bool {
        if self.location.is_some_and(|l| l != visit.location) {
            return false;
        }
        if self.category.is_some_and(|c| c != visit.category) {
            return false;
        }
        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }

        let day = zone.local_date(visit.timestamp);
        self.start_date.map_or(true, |start| day >= start)
            && self.end_date.map_or(true, |end| day <= end)
    }

    /// Matching visits, order preserved
    pub fn apply<'a>(&self, visits: &'a [Visit], zone: KioskZone) -> Vec<&'a Visit> {
        visits.iter().filter(|v| self.matches(v, zone)).collect()
    }
}

/// Number of people represented by a set of visits
pub fn headcount<'a, I>(visits: I) -> u64
where
    I: IntoIterator<Item = &'a Visit>,
{
    visits.into_iter().map(|v| u64::from(v.group_size)).sum()
}
