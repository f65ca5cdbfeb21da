//! Static travel content.
//!
//! Every topic's records live in read-only tables. Screens reach them through
//! the [`Catalog`] trait so tests can substitute their own content.

pub mod adventures;
pub mod culture;
pub mod destinations;
pub mod help;
pub mod planner;
pub mod regions;
pub mod tips;

pub use adventures::{Adventure, ADVENTURES};
pub use culture::{CultureAspect, CULTURE};
pub use destinations::{region_emoji, Destination, DESTINATIONS};
pub use help::{HelpSection, HELP_SECTIONS};
pub use planner::{TripTemplate, TRIP_TEMPLATES};
pub use regions::{Region, REGIONS};
pub use tips::{Importance, Tip, TipCategory, TIP_CATEGORIES};

/// A record that can be listed and looked up by id.
///
/// Ids are unique within one table and are what selection values carry.
pub trait Record {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
}

/// Destination names offered when the message store has none of its own.
pub static FALLBACK_DESTINATIONS: &[&str] = &[
    "Everest Base Camp",
    "Annapurna Circuit",
    "Kathmandu Valley",
    "Pokhara",
    "Chitwan National Park",
    "Lumbini",
    "Bandipur",
    "Gorkha",
    "Langtang Valley",
    "Manaslu Circuit",
];

/// Source of every topic's records.
pub trait Catalog {
    fn destinations(&self) -> &'static [Destination];
    fn regions(&self) -> &'static [Region];
    fn culture(&self) -> &'static [CultureAspect];
    fn adventures(&self) -> &'static [Adventure];
    fn tip_categories(&self) -> &'static [TipCategory];
    fn trip_templates(&self) -> &'static [TripTemplate];
    fn help_sections(&self) -> &'static [HelpSection];
    fn fallback_destinations(&self) -> &'static [&'static str];
}

/// The built-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl Catalog for StaticCatalog {
    fn destinations(&self) -> &'static [Destination] {
        DESTINATIONS
    }

    fn regions(&self) -> &'static [Region] {
        REGIONS
    }

    fn culture(&self) -> &'static [CultureAspect] {
        CULTURE
    }

    fn adventures(&self) -> &'static [Adventure] {
        ADVENTURES
    }

    fn tip_categories(&self) -> &'static [TipCategory] {
        TIP_CATEGORIES
    }

    fn trip_templates(&self) -> &'static [TripTemplate] {
        TRIP_TEMPLATES
    }

    fn help_sections(&self) -> &'static [HelpSection] {
        HELP_SECTIONS
    }

    fn fallback_destinations(&self) -> &'static [&'static str] {
        FALLBACK_DESTINATIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<R: Record>(records: &[R]) {
        let mut seen = HashSet::new();
        for record in records {
            assert!(seen.insert(record.id()), "duplicate id {}", record.id());
            // "back" is reserved for the back option
            assert_ne!(record.id(), "back");
        }
    }

    #[test]
    fn test_ids_are_unique_per_table() {
        let catalog = StaticCatalog;
        assert_unique(catalog.destinations());
        assert_unique(catalog.regions());
        assert_unique(catalog.culture());
        assert_unique(catalog.adventures());
        assert_unique(catalog.tip_categories());
        assert_unique(catalog.trip_templates());
        assert_unique(catalog.help_sections());
        for category in catalog.tip_categories() {
            assert_unique(category.tips);
        }
    }

    #[test]
    fn test_tables_are_populated() {
        let catalog = StaticCatalog;
        assert_eq!(catalog.destinations().len(), 6);
        assert_eq!(catalog.regions().len(), 3);
        assert_eq!(catalog.trip_templates().len(), 5);
        assert_eq!(catalog.fallback_destinations().len(), 10);
    }
}
