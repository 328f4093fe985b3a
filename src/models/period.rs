//! Calendar periods used for ticket numbering and dashboard totals

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveTime, Offset,
    TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A counting period; each one restarts at its calendar boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Restarts at midnight
    Daily,
    /// Restarts on Sunday at midnight
    Weekly,
    /// Restarts on the 1st of the month at midnight
    Monthly,
    /// Restarts on January 1st at midnight
    Yearly,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Daily, Period::Weekly, Period::Monthly, Period::Yearly];

    /// First calendar day of the period containing `date`
    pub fn first_day(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Daily => date,
            Period::Weekly => {
                date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
            }
            Period::Monthly => date.with_day(1).unwrap_or(date),
            Period::Yearly => date.with_ordinal(1).unwrap_or(date),
        }
    }

    /// Instant at which the period containing `now` began, in the calendar of `tz`
    pub fn start_in<Tz: TimeZone>(&self, tz: &Tz, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.with_timezone(tz).date_naive();
        midnight_in(tz, self.first_day(today))
    }
}

/// First instant of `date` in `tz`.
///
/// Where midnight is skipped by a DST jump the first valid instant of the
/// day is used; where it happens twice, the earlier one.
fn midnight_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // The jump happens at midnight under the offset in force just before it
        LocalResult::None => (1..=3)
            .find_map(|hours| tz.from_local_datetime(&(naive - Duration::hours(hours))).latest())
            .map(|before| {
                let offset = before.offset().fix().local_minus_utc();
                Utc.from_utc_datetime(&(naive - Duration::seconds(i64::from(offset))))
            })
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
    }
}

/// Time zone whose calendar decides where periods begin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KioskZone {
    /// Time zone of the host running the kiosk
    Local,
    /// Fixed offset from UTC
    Fixed(FixedOffset),
}

impl KioskZone {
    pub fn period_start(&self, period: Period, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            KioskZone::Local => period.start_in(&Local, now),
            KioskZone::Fixed(offset) => period.start_in(offset, now),
        }
    }

    /// Calendar date of an instant as seen at the kiosk
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        match self {
            KioskZone::Local => at.with_timezone(&Local).date_naive(),
            KioskZone::Fixed(offset) => at.with_timezone(offset).date_naive(),
        }
    }

    /// Format an instant in kiosk time with a strftime pattern
    pub fn format(&self, at: DateTime<Utc>, pattern: &str) -> String {
        match self {
            KioskZone::Local => at.with_timezone(&Local).format(pattern).to_string(),
            KioskZone::Fixed(offset) => at.with_timezone(offset).format(pattern).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_first_day() {
        // 2025-03-13 is a Thursday
        let date = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
        assert_eq!(Period::Daily.first_day(date), date);
        assert_eq!(Period::Weekly.first_day(date), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(Period::Monthly.first_day(date), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(Period::Yearly.first_day(date), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_week_starts_on_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(Period::Weekly.first_day(sunday), sunday);

        let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(Period::Weekly.first_day(saturday), sunday);

        // Week spanning a year boundary
        let jan_1 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(Period::Weekly.first_day(jan_1), NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
    }

    #[test]
    fn test_start_uses_kiosk_calendar() {
        let zone = KioskZone::Fixed(FixedOffset::east_opt(8 * 3600).unwrap());
        // 2025-03-13 17:30 UTC is already 2025-03-14 01:30 at UTC+8
        let now = utc("2025-03-13T17:30:00Z");

        assert_eq!(zone.period_start(Period::Daily, now), utc("2025-03-13T16:00:00Z"));
        assert_eq!(zone.period_start(Period::Weekly, now), utc("2025-03-08T16:00:00Z"));
        assert_eq!(zone.period_start(Period::Monthly, now), utc("2025-02-28T16:00:00Z"));
        assert_eq!(zone.period_start(Period::Yearly, now), utc("2024-12-31T16:00:00Z"));
        assert_eq!(zone.local_date(now), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(zone.format(now, "%H:%M"), "01:30");
    }

    #[test]
    fn test_day_starts_after_skipped_midnight() {
        // Havana springs forward from 00:00 (UTC-5) to 01:00 (UTC-4) on Sunday 2024-03-10
        let tz = chrono_tz::America::Havana;
        let now = utc("2024-03-10T15:00:00Z");

        let start = Period::Daily.start_in(&tz, now);
        assert_eq!(start, utc("2024-03-10T05:00:00Z"));
        assert_eq!(start.with_timezone(&tz).format("%H:%M").to_string(), "01:00");
        assert_eq!(Period::Weekly.start_in(&tz, now), start);

        // Nothing before the jump belongs to the new day
        let before = utc("2024-03-10T04:59:59Z");
        assert_eq!(Period::Daily.start_in(&tz, before), utc("2024-03-09T05:00:00Z"));
    }

    #[test]
    fn test_day_starts_at_first_of_repeated_midnights() {
        // Havana falls back from 01:00 (UTC-4) to 00:00 (UTC-5) on 2024-11-03,
        // so local midnight occurs at 04:00Z and again at 05:00Z
        let tz = chrono_tz::America::Havana;

        assert_eq!(
            Period::Daily.start_in(&tz, utc("2024-11-03T15:00:00Z")),
            utc("2024-11-03T04:00:00Z")
        );
        // Inside the repeated hour, second pass
        assert_eq!(
            Period::Daily.start_in(&tz, utc("2024-11-03T05:30:00Z")),
            utc("2024-11-03T04:00:00Z")
        );
        // Month start is unaffected
        assert_eq!(
            Period::Monthly.start_in(&tz, utc("2024-11-03T15:00:00Z")),
            utc("2024-11-01T04:00:00Z")
        );
    }
}
