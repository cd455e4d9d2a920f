//! Events domain - the static catalog.

pub mod catalog;

pub use catalog::{list_events, EventCatalog};
