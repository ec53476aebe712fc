//! Harvest core: pure domain model and run configuration.
mod config;
mod model;
mod summary;

pub use config::{HarvestConfig, RunMode};
pub use model::{ContentType, Site, Taxonomy, TermId};
pub use summary::{HarvestSummary, SiteSummary, TypeCount};
