//! Words hidden from ranked results.

use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{TallyError, TallyResult};
use crate::normalize::normalize;

/// User-controlled set of excluded words.
///
/// Exclusions only affect what is displayed; counts are never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    words: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and exclude a word, returning the normalized form.
    pub fn add(&mut self, word: &str) -> TallyResult<String> {
        let word = normalized(word)?;
        if self.words.contains(&word) {
            return Err(TallyError::AlreadyExcluded(word));
        }
        debug!(word = %word, "Excluding word");
        self.words.insert(word.clone());
        Ok(word)
    }

    /// Normalize and stop excluding a word, returning the normalized form.
    pub fn remove(&mut self, word: &str) -> TallyResult<String> {
        let word = normalized(word)?;
        if !self.words.remove(&word) {
            return Err(TallyError::NotExcluded(word));
        }
        debug!(word = %word, "Removed exclusion");
        Ok(word)
    }

    /// Remove every exclusion, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.words.len();
        self.words.clear();
        removed
    }

    /// Excluded words in sorted order.
    pub fn list(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Whether an already-normalized word is excluded.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalized(word: &str) -> TallyResult<String> {
    let normalized = normalize(word.trim());
    if normalized.is_empty() {
        return Err(TallyError::EmptyWord(word.to_string()));
    }
    Ok(normalized)
}
