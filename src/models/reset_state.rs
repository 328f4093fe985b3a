//! Ticket counters and their periodic resets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::period::{KioskZone, Period};

/// Running count for one period and the instant it last restarted
/// (a fresh counter reads as last reset at the Unix epoch)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PeriodCounter {
    pub count: u32,
    pub last_reset: DateTime<Utc>,
}

/// Persisted counters for all four periods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResetState {
    pub daily: PeriodCounter,
    pub weekly: PeriodCounter,
    pub monthly: PeriodCounter,
    pub yearly: PeriodCounter,
}

/// Sequence numbers handed to a single visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TicketNumbers {
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
    pub yearly: u32,
}

impl ResetState {
    fn counter_mut(&mut self, period: Period) -> &mut PeriodCounter {
        match period {
            Period::Daily => &mut self.daily,
            Period::Weekly => &mut self.weekly,
            Period::Monthly => &mut self.monthly,
            Period::Yearly => &mut self.yearly,
        }
    }

    /// Zero every counter whose last reset predates the start of its current period
    pub fn rolled_to(mut self, zone: KioskZone, now: DateTime<Utc>) -> Self {
        for period in Period::ALL {
            let start = zone.period_start(period, now);
            let counter = self.counter_mut(period);
            if counter.last_reset < start {
                counter.count = 0;
                counter.last_reset = start;
            }
        }
        self
    }

    /// Apply pending resets, then count `group_size` people in every period.
    ///
    /// Returns the new state and the numbers the checking-in visit receives.
    pub fn advance(self, zone: KioskZone, now: DateTime<Utc>, group_size: u32) -> (Self, TicketNumbers) {
        let mut state = self.rolled_to(zone, now);
        for period in Period::ALL {
            let counter = state.counter_mut(period);
            counter.count = counter.count.saturating_add(group_size);
        }

        let numbers = TicketNumbers {
            daily: state.daily.count,
            weekly: state.weekly.count,
            monthly: state.monthly.count,
            yearly: state.yearly.count,
        };
        (state, numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn zone() -> KioskZone {
        KioskZone::Fixed(FixedOffset::east_opt(0).unwrap())
    }

    #[test]
    fn test_first_visit_starts_every_counter() {
        let (state, numbers) = ResetState::default().advance(zone(), utc("2025-03-13T10:00:00Z"), 1);

        assert_eq!(numbers, TicketNumbers { daily: 1, weekly: 1, monthly: 1, yearly: 1 });
        assert_eq!(state.daily.last_reset, utc("2025-03-13T00:00:00Z"));
        assert_eq!(state.weekly.last_reset, utc("2025-03-09T00:00:00Z"));
        assert_eq!(state.monthly.last_reset, utc("2025-03-01T00:00:00Z"));
        assert_eq!(state.yearly.last_reset, utc("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn test_numbers_grow_by_group_size_within_period() {
        let now = utc("2025-03-13T10:00:00Z");
        let (state, first) = ResetState::default().advance(zone(), now, 1);
        let (state, second) = state.advance(zone(), now + chrono::Duration::minutes(5), 30);
        let (_, third) = state.advance(zone(), now + chrono::Duration::minutes(9), 1);

        assert_eq!(first.daily, 1);
        assert_eq!(second.daily, 31);
        assert_eq!(third.daily, 32);
        assert_eq!(third.yearly, 32);
    }

    #[test]
    fn test_midnight_resets_daily_only() {
        // Thursday evening, then Friday morning
        let (state, _) = ResetState::default().advance(zone(), utc("2025-03-13T22:00:00Z"), 4);
        let (state, numbers) = state.advance(zone(), utc("2025-03-14T08:00:00Z"), 2);

        assert_eq!(numbers, TicketNumbers { daily: 2, weekly: 6, monthly: 6, yearly: 6 });
        assert_eq!(state.daily.last_reset, utc("2025-03-14T00:00:00Z"));
    }

    #[test]
    fn test_sunday_resets_week() {
        // Saturday, then Sunday
        let (state, _) = ResetState::default().advance(zone(), utc("2025-03-15T12:00:00Z"), 3);
        let (_, numbers) = state.advance(zone(), utc("2025-03-16T09:00:00Z"), 5);

        assert_eq!(numbers, TicketNumbers { daily: 5, weekly: 5, monthly: 8, yearly: 8 });
    }

    #[test]
    fn test_month_and_year_boundaries() {
        let (state, _) = ResetState::default().advance(zone(), utc("2024-12-31T23:59:00Z"), 7);
        let (state, numbers) = state.advance(zone(), utc("2025-01-01T00:01:00Z"), 1);
        assert_eq!(numbers, TicketNumbers { daily: 1, weekly: 8, monthly: 1, yearly: 1 });

        let (_, numbers) = state.advance(zone(), utc("2025-02-01T10:00:00Z"), 2);
        assert_eq!(numbers.monthly, 2);
        assert_eq!(numbers.yearly, 3);
    }

    #[test]
    fn test_rolled_to_does_not_count() {
        let (state, _) = ResetState::default().advance(zone(), utc("2025-03-13T10:00:00Z"), 9);

        let same_day = state.rolled_to(zone(), utc("2025-03-13T18:00:00Z"));
        assert_eq!(same_day.daily.count, 9);

        let next_day = state.rolled_to(zone(), utc("2025-03-14T09:00:00Z"));
        assert_eq!(next_day.daily.count, 0);
        assert_eq!(next_day.weekly.count, 9);
    }

    #[test]
    fn test_boundary_in_kiosk_zone() {
        let plus8 = KioskZone::Fixed(FixedOffset::east_opt(8 * 3600).unwrap());
        // 15:30Z and 16:30Z fall on different local days at UTC+8
        let (state, _) = ResetState::default().advance(plus8, utc("2025-03-13T15:30:00Z"), 1);
        let (_, numbers) = state.advance(plus8, utc("2025-03-13T16:30:00Z"), 1);

        assert_eq!(numbers.daily, 1);
        assert_eq!(numbers.weekly, 2);
    }
}
