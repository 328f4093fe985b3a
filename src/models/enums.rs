//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Lang
// ---------------------------------------------------------------------------

/// Interface language of the kiosk and dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ms,
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Lang::En => "English",
            Lang::Ms => "Bahasa Melayu",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// VisitorCategory
// ---------------------------------------------------------------------------

/// Who is checking in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisitorCategory {
    Student,
    Visitor,
    /// Group visit (school tour, organised party)
    Lawatan,
}

impl VisitorCategory {
    pub const ALL: [VisitorCategory; 3] = [
        VisitorCategory::Student,
        VisitorCategory::Visitor,
        VisitorCategory::Lawatan,
    ];

    /// Whether a single check-in may stand for several people
    pub fn is_group(&self) -> bool {
        matches!(self, VisitorCategory::Lawatan)
    }

    /// Plural label used on dashboard charts
    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (VisitorCategory::Student, Lang::En) => "Students",
            (VisitorCategory::Student, Lang::Ms) => "Pelajar",
            (VisitorCategory::Visitor, Lang::En) => "Visitors",
            (VisitorCategory::Visitor, Lang::Ms) => "Pelawat",
            (VisitorCategory::Lawatan, Lang::En) => "Groups",
            (VisitorCategory::Lawatan, Lang::Ms) => "Lawatan",
        }
    }
}

impl std::fmt::Display for VisitorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VisitorCategory::Student => "Student",
            VisitorCategory::Visitor => "Visitor",
            VisitorCategory::Lawatan => "Lawatan",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Venue the visitor is entering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Museum,
    ArtsGallery,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Museum, Location::ArtsGallery];

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Location::Museum, Lang::En) => "Museum",
            (Location::Museum, Lang::Ms) => "Muzium",
            (Location::ArtsGallery, Lang::En) => "Arts Gallery",
            (Location::ArtsGallery, Lang::Ms) => "Galeri Seni",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Location::Museum => "Museum",
            Location::ArtsGallery => "Arts Gallery",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Location::ArtsGallery).unwrap(), "\"arts_gallery\"");
        assert_eq!(serde_json::to_string(&VisitorCategory::Lawatan).unwrap(), "\"lawatan\"");
        assert_eq!(serde_json::from_str::<Lang>("\"ms\"").unwrap(), Lang::Ms);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Location::ArtsGallery.to_string(), "Arts Gallery");
        assert_eq!(Location::Museum.label(Lang::Ms), "Muzium");
        assert_eq!(VisitorCategory::Student.label(Lang::En), "Students");
        assert!(VisitorCategory::Lawatan.is_group());
        assert!(!VisitorCategory::Visitor.is_group());
    }
}
