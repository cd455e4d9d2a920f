//! Static event catalog.
//!
//! Hard-coded and read-only; identical for every request and never
//! persisted. Event signups are not cross-checked against this list.

use serde::Serialize;

/// Category-to-events mapping returned by `GET /events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventCatalog {
    pub sports: &'static [&'static str],
    pub cultural: &'static [&'static str],
    pub tech: &'static [&'static str],
}

pub const CATALOG: EventCatalog = EventCatalog {
    sports: &["Cricket", "Football", "Basketball"],
    cultural: &["Dance", "Drama", "Singing"],
    tech: &["Hackathon", "Debugging", "Coding Contest"],
};

/// The full catalog. Pure: no arguments, no side effects, no failure modes.
pub fn list_events() -> EventCatalog {
    CATALOG
}
