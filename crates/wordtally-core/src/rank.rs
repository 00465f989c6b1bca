//! Descending-frequency ranking.
//!
//! Ties keep the table's lexicographic order, so the ranking is fully
//! determined by the table's contents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::counter::FrequencyTable;

/// A word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Sorting algorithm used to rank a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStrategy {
    /// In-place insertion sort, O(n²).
    #[default]
    Insertion,
    /// The standard library's stable merge sort.
    Merge,
}

impl RankStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Merge => "merge",
        }
    }
}

impl fmt::Display for RankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insertion" => Ok(Self::Insertion),
            "merge" | "stable" => Ok(Self::Merge),
            other => Err(format!(
                "unknown rank strategy '{other}' (expected 'insertion' or 'merge')"
            )),
        }
    }
}

/// Entries ordered by descending count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedEntry] {
        &self.entries
    }
}

impl From<Vec<RankedEntry>> for RankedList {
    /// Wrap entries that are already in ranked order.
    fn from(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rank a table by descending count without modifying it.
pub fn rank(table: &FrequencyTable, strategy: RankStrategy) -> RankedList {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(word, count)| RankedEntry::new(word, count))
        .collect();

    match strategy {
        RankStrategy::Insertion => insertion_sort(&mut entries),
        RankStrategy::Merge => entries.sort_by(|a, b| b.count.cmp(&a.count)),
    }

    RankedList { entries }
}

/// Shift each entry left past every neighbour with a strictly smaller count.
///
/// Equal counts stop the shift, which keeps the sort stable.
fn insertion_sort(entries: &mut [RankedEntry]) {
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && entries[j].count > entries[j - 1].count {
            entries.swap(j, j - 1);
            j -= 1;
        }
    }
}
