//! Frequency counting.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::normalize::normalize;

/// Occurrence counts keyed by normalized word.
///
/// Keys iterate in lexicographic order, which is the tie order the
/// ranking preserves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: BTreeMap<String, usize>,
    tokens_seen: usize,
    discarded: usize,
}

impl FrequencyTable {
    /// Count of a normalized word, if present.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    ///
    /// This is the figure reported as "total words".
    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tokens fed to the counter, including discarded ones.
    pub fn tokens_seen(&self) -> usize {
        self.tokens_seen
    }

    /// Tokens that normalized to nothing.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    fn record(&mut self, token: &str) {
        self.tokens_seen += 1;
        let word = normalize(token);
        if word.is_empty() {
            self.discarded += 1;
            return;
        }
        *self.counts.entry(word).or_insert(0) += 1;
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(tokens: I) -> Self {
        let mut table = Self::default();
        for token in tokens {
            table.record(token.as_ref());
        }
        table
    }
}

/// Count the normalized words in a token sequence.
pub fn count<I, S>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table: FrequencyTable = tokens.into_iter().collect();
    debug!(
        tokens = table.tokens_seen,
        discarded = table.discarded,
        unique = table.unique_words(),
        "Counted corpus"
    );
    table
}
