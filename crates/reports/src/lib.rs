//! Reporting module: summary statistics over the live inventory.
//!
//! A thin aggregation layer: every query re-reads the injected inventory
//! collaborator, so results always reflect current state. Nothing here is
//! persisted or formatted; rendering belongs to the presentation layer.

pub mod generator;

pub use generator::{InventoryReport, ReportGenerator};
