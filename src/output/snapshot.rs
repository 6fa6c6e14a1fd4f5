//! Snapshot assembly and JSON serialization

use crate::classify::category_names;
use crate::enrich::EnrichedLink;
use crate::output::OutputResult;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The links found in one run, with the time they were captured
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// RFC 3339 capture time with an explicit `+00:00` offset
    pub timestamp: String,

    /// Deduplicated enriched links
    pub links: Vec<EnrichedLink>,

    /// Every category name, in classification priority order
    pub categories: Vec<&'static str>,
}

impl Snapshot {
    /// Creates a snapshot stamped with the current time
    pub fn new(links: Vec<EnrichedLink>) -> Self {
        Self::captured_at(Utc::now(), links)
    }

    /// Creates a snapshot stamped with the given time
    pub fn captured_at(at: DateTime<Utc>, links: Vec<EnrichedLink>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, false),
            links,
            categories: category_names(),
        }
    }
}

/// Serializes a snapshot to compact JSON with control characters removed
///
/// Strings are written without ASCII escaping, so non-ASCII text stays readable.
pub fn to_json(snapshot: &Snapshot) -> OutputResult<String> {
    let json = serde_json::to_string(snapshot)?;
    Ok(strip_control_characters(&json))
}

/// Writes a snapshot as UTF-8 JSON to the given path
///
/// # Arguments
///
/// * `snapshot` - The snapshot to persist
/// * `output_path` - Target file; created or truncated
pub fn write_snapshot(snapshot: &Snapshot, output_path: &Path) -> OutputResult<()> {
    let json = to_json(snapshot)?;

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Removes every Unicode control character (C0, DEL, and C1)
///
/// Format characters such as zero-width joiners are kept.
pub fn strip_control_characters(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}
