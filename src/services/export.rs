//! CSV export of the visit log

use chrono::{DateTime, Utc};

use crate::models::{KioskZone, Lang, Visit};

#[derive(Clone)]
pub struct ExportService {
    zone: KioskZone,
}

impl ExportService {
    pub fn new(zone: KioskZone) -> Self {
        Self { zone }
    }

    /// Render visits as CSV, one row per visit in the given order
    pub fn to_csv<'a, I>(&self, visits: I, lang: Lang) -> String
    where
        I: IntoIterator<Item = &'a Visit>,
    {
        let mut lines = vec![headers(lang).map(escape_field).join(",")];

        for visit in visits {
            let row = [
                visit.category.to_string(),
                visit.location.to_string(),
                self.zone.format(visit.timestamp, "%Y-%m-%d"),
                self.zone.format(visit.timestamp, "%H:%M:%S"),
                visit.daily_number.to_string(),
            ];
            lines.push(row.iter().map(|f| escape_field(f)).collect::<Vec<_>>().join(","));
        }

        lines.join("\n")
    }

    /// Download name for an export made at `now`
    pub fn file_name(&self, now: DateTime<Utc>) -> String {
        format!("Artemis_Logs_{}.csv", now.format("%Y-%m-%d"))
    }
}

fn headers(lang: Lang) -> [&'static str; 5] {
    match lang {
        Lang::En => ["Category", "Location", "Date", "Time", "Seq"],
        Lang::Ms => ["Kategori", "Lokasi", "Date", "Time", "No. Siri"],
    }
}

/// Quote a field when it holds a separator, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::visit::fixtures::visit;
    use crate::models::{Location, VisitFilter, VisitorCategory};
    use chrono::FixedOffset;

    fn service() -> ExportService {
        ExportService::new(KioskZone::Fixed(FixedOffset::east_opt(8 * 3600).unwrap()))
    }

    #[test]
    fn test_csv_layout() {
        let mut v = visit(VisitorCategory::Student, Location::ArtsGallery, "2025-03-13T17:05:09Z", 1);
        v.daily_number = 42;

        let csv = service().to_csv([&v], Lang::En);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Category,Location,Date,Time,Seq");
        assert_eq!(lines[1], "Student,Arts Gallery,2025-03-14,01:05:09,42");
    }

    #[test]
    fn test_row_count_matches_filter() {
        let visits = vec![
            visit(VisitorCategory::Student, Location::Museum, "2025-03-13T01:00:00Z", 1),
            visit(VisitorCategory::Visitor, Location::ArtsGallery, "2025-03-13T02:00:00Z", 1),
            visit(VisitorCategory::Lawatan, Location::Museum, "2025-03-13T03:00:00Z", 40),
        ];
        let service = service();

        for location in [None, Some(Location::Museum), Some(Location::ArtsGallery)] {
            let selected = VisitFilter::at(location).apply(&visits, service.zone);
            let csv = service.to_csv(selected.iter().copied(), Lang::Ms);
            assert_eq!(csv.lines().count(), selected.len() + 1);
        }

        assert_eq!(service.to_csv(Vec::<Visit>::new().iter(), Lang::En), "Category,Location,Date,Time,Seq");
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("No. Siri"), "No. Siri");
    }

    #[test]
    fn test_file_name() {
        let now = DateTime::parse_from_rfc3339("2025-03-13T17:05:09Z").unwrap().with_timezone(&Utc);
        assert_eq!(service().file_name(now), "Artemis_Logs_2025-03-13.csv");
    }
}
