//! Run statistics

use std::collections::BTreeMap;
use std::fmt;

/// Counters collected over one orchestrator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Stories returned by the forum
    pub stories: usize,

    /// Candidate links after harvest dedup
    pub harvested: usize,

    /// Candidate links left after filtering
    pub after_filter: usize,

    /// Enrichment failures, keyed by failure reason
    pub failures: BTreeMap<&'static str, usize>,

    /// Enriched links dropped for an empty title or URL
    pub dropped_empty: usize,

    /// Links in the final snapshot
    pub kept: usize,
}

impl RunStats {
    pub fn record_failure(&mut self, reason: &'static str) {
        *self.failures.entry(reason).or_insert(0) += 1;
    }

    pub fn total_failures(&self) -> usize {
        self.failures.values().sum()
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stories, {} candidates harvested, {} after filter, {} failed",
            self.stories,
            self.harvested,
            self.after_filter,
            self.total_failures()
        )?;

        if !self.failures.is_empty() {
            let reasons: Vec<String> = self
                .failures
                .iter()
                .map(|(reason, count)| format!("{}={}", reason, count))
                .collect();
            write!(f, " ({})", reasons.join(", "))?;
        }

        write!(
            f,
            ", {} dropped without title, {} kept",
            self.dropped_empty, self.kept
        )
    }
}
