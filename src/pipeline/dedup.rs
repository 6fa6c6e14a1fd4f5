//! Final deduplication of enriched links

use crate::enrich::EnrichedLink;
use std::collections::HashMap;

/// Collapses links sharing a URL into one entry
///
/// The last link processed for a URL wins, and it takes the position where that URL first
/// appeared.
pub fn dedup_last_wins(links: Vec<EnrichedLink>) -> Vec<EnrichedLink> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(links.len());
    let mut deduped: Vec<EnrichedLink> = Vec::with_capacity(links.len());

    for link in links {
        match positions.get(&link.url) {
            Some(&index) => deduped[index] = link,
            None => {
                positions.insert(link.url.clone(), deduped.len());
                deduped.push(link);
            }
        }
    }

    deduped
}
