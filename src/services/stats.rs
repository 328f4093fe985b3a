//! Statistics service for the dashboard

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::{
        stats::{ChartData, CounterStats, StatEntry},
        visit::headcount,
        KioskZone, Lang, Location, Period, Visit, VisitFilter, VisitorCategory,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
    zone: KioskZone,
}

impl StatsService {
    pub fn new(repository: Repository, zone: KioskZone) -> Self {
        Self { repository, zone }
    }

    /// Head-counts for the current day, week, month and year
    pub async fn counter_stats(&self, location: Option<Location>) -> AppResult<CounterStats> {
        let visits = self.repository.visits.list().await?;
        Ok(counter_stats(&visits, location, self.zone, Utc::now()))
    }

    pub async fn chart_data(&self, location: Option<Location>, lang: Lang) -> AppResult<ChartData> {
        let visits = self.repository.visits.list().await?;
        Ok(chart_data(&visits, location, lang, self.zone))
    }
}

pub fn counter_stats(
    visits: &[Visit],
    location: Option<Location>,
    zone: KioskZone,
    now: DateTime<Utc>,
) -> CounterStats {
    let selected = VisitFilter::at(location).apply(visits, zone);
    let since = |period: Period| {
        let start = zone.period_start(period, now);
        headcount(selected.iter().copied().filter(|v| v.timestamp >= start))
    };

    CounterStats {
        daily: since(Period::Daily),
        weekly: since(Period::Weekly),
        monthly: since(Period::Monthly),
        yearly: since(Period::Yearly),
        all_time: headcount(selected.iter().copied()),
    }
}

/// Location split over every visit; category split over the selected location only
pub fn chart_data(
    visits: &[Visit],
    location: Option<Location>,
    lang: Lang,
    zone: KioskZone,
) -> ChartData {
    let locations = Location::ALL
        .iter()
        .map(|&l| StatEntry {
            label: l.label(lang).to_string(),
            value: headcount(VisitFilter::at(Some(l)).apply(visits, zone)),
        })
        .collect();

    let categories = VisitorCategory::ALL
        .iter()
        .map(|&c| StatEntry {
            label: c.label(lang).to_string(),
            value: headcount(
                VisitFilter {
                    location,
                    category: Some(c),
                    ..VisitFilter::default()
                }
                .apply(visits, zone),
            ),
        })
        .collect();

    ChartData { locations, categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::visit::fixtures::visit;
    use chrono::FixedOffset;

    fn zone() -> KioskZone {
        KioskZone::Fixed(FixedOffset::east_opt(0).unwrap())
    }

    fn sample() -> Vec<Visit> {
        vec![
            // Friday 2025-03-14
            visit(VisitorCategory::Lawatan, Location::Museum, "2025-03-14T09:00:00Z", 25),
            visit(VisitorCategory::Student, Location::ArtsGallery, "2025-03-14T08:00:00Z", 1),
            // Earlier this week
            visit(VisitorCategory::Visitor, Location::Museum, "2025-03-10T10:00:00Z", 1),
            // Earlier this month, previous week
            visit(VisitorCategory::Student, Location::Museum, "2025-03-03T11:00:00Z", 1),
            // Earlier this year
            visit(VisitorCategory::Visitor, Location::ArtsGallery, "2025-01-20T11:00:00Z", 1),
            // Last year
            visit(VisitorCategory::Lawatan, Location::ArtsGallery, "2024-11-10T11:00:00Z", 12),
        ]
    }

    #[test]
    fn test_counter_stats() {
        let now = DateTime::parse_from_rfc3339("2025-03-14T12:00:00Z").unwrap().with_timezone(&Utc);
        let visits = sample();

        let all = counter_stats(&visits, None, zone(), now);
        assert_eq!(
            all,
            CounterStats { daily: 26, weekly: 27, monthly: 28, yearly: 29, all_time: 41 }
        );

        let museum = counter_stats(&visits, Some(Location::Museum), zone(), now);
        assert_eq!(
            museum,
            CounterStats { daily: 25, weekly: 26, monthly: 27, yearly: 27, all_time: 27 }
        );

        let gallery = counter_stats(&visits, Some(Location::ArtsGallery), zone(), now);
        assert_eq!(gallery.all_time + museum.all_time, all.all_time);
        assert_eq!(gallery.daily + museum.daily, all.daily);
    }

    #[test]
    fn test_chart_data() {
        let visits = sample();
        let charts = chart_data(&visits, Some(Location::ArtsGallery), Lang::En, zone());

        assert_eq!(charts.locations[0], StatEntry { label: "Museum".to_string(), value: 27 });
        assert_eq!(charts.locations[1], StatEntry { label: "Arts Gallery".to_string(), value: 14 });

        let values: Vec<u64> = charts.categories.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 1, 12]);

        let malay = chart_data(&visits, None, Lang::Ms, zone());
        assert_eq!(malay.categories[0].label, "Pelajar");
        assert_eq!(malay.categories[2].value, 37);
    }
}
