//! Queries against a ranked corpus.

use serde::Serialize;

use crate::counter::FrequencyTable;
use crate::error::{TallyError, TallyResult};
use crate::exclusion::ExclusionSet;
use crate::normalize::normalize;
use crate::rank::{RankedEntry, RankedList};

/// The first `requested` non-excluded entries of a ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopN {
    pub entries: Vec<RankedEntry>,
    /// Entries emitted.
    pub displayed: usize,
    /// Excluded entries passed over before the limit was reached.
    pub skipped: usize,
    pub requested: usize,
    /// Non-excluded entries in the whole list.
    pub available: usize,
}

impl TopN {
    /// Whether fewer entries exist than were requested.
    pub fn is_truncated(&self) -> bool {
        self.requested > self.available
    }
}

/// Walk the ranked list, skipping excluded words, until `limit` entries
/// have been collected.
pub fn top_n(ranked: &RankedList, exclusions: &ExclusionSet, limit: usize) -> TopN {
    let mut entries = Vec::with_capacity(limit.min(ranked.len()));
    let mut skipped = 0;

    for entry in ranked {
        if entries.len() >= limit {
            break;
        }
        if exclusions.contains(&entry.word) {
            skipped += 1;
            continue;
        }
        entries.push(entry.clone());
    }

    let available = ranked
        .iter()
        .filter(|entry| !exclusions.contains(&entry.word))
        .count();

    TopN {
        displayed: entries.len(),
        entries,
        skipped,
        requested: limit,
        available,
    }
}

/// Count of a word in the table, regardless of exclusions.
pub fn lookup(word: &str, table: &FrequencyTable) -> TallyResult<usize> {
    let normalized = normalize(word.trim());
    if normalized.is_empty() {
        return Err(TallyError::EmptyWord(word.to_string()));
    }
    table
        .get(&normalized)
        .ok_or(TallyError::WordNotFound(normalized))
}
