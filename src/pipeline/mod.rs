//! Batch pipeline
//!
//! Ties the harvester, filter, enricher, and final dedup together into a single run.

mod dedup;
mod filter;
mod orchestrator;
mod stats;

pub use dedup::dedup_last_wins;
pub use filter::{filter_candidates, is_fetchable};
pub use orchestrator::Orchestrator;
pub use stats::RunStats;
