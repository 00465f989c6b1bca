//! Interactive session state and command dispatch.

pub mod model;

use tracing::debug;

use crate::counter::FrequencyTable;
use crate::error::TallyResult;
use crate::exclusion::ExclusionSet;
use crate::limit::DisplayLimit;
use crate::query::{lookup, top_n, TopN};
use crate::rank::{rank, RankStrategy, RankedList};
use model::{Command, CorpusSummary, Report};

/// Everything a user can query or change while browsing one corpus.
///
/// The table and ranking are fixed once the session starts; only the
/// exclusions and display limit change.
#[derive(Debug, Clone)]
pub struct Session {
    table: FrequencyTable,
    ranked: RankedList,
    exclusions: ExclusionSet,
    limit: DisplayLimit,
}

impl Session {
    /// Rank a counted corpus and start with no exclusions.
    pub fn new(table: FrequencyTable, strategy: RankStrategy) -> Self {
        let ranked = rank(&table, strategy);
        debug!(
            unique = ranked.len(),
            strategy = %strategy,
            "Ranked corpus"
        );
        Self {
            table,
            ranked,
            exclusions: ExclusionSet::new(),
            limit: DisplayLimit::default(),
        }
    }

    /// Count tokens and start a session over them.
    pub fn from_tokens<I, S>(tokens: I, strategy: RankStrategy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(crate::counter::count(tokens), strategy)
    }

    pub fn with_limit(mut self, limit: DisplayLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn ranked(&self) -> &RankedList {
        &self.ranked
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn exclusions_mut(&mut self) -> &mut ExclusionSet {
        &mut self.exclusions
    }

    pub fn limit(&self) -> DisplayLimit {
        self.limit
    }

    pub fn summary(&self) -> CorpusSummary {
        CorpusSummary {
            unique_words: self.table.unique_words(),
            tokens_seen: self.table.tokens_seen(),
            discarded: self.table.discarded(),
        }
    }

    /// Top entries under the current limit and exclusions.
    pub fn results(&self) -> TopN {
        top_n(&self.ranked, &self.exclusions, self.limit.get())
    }

    /// Run one command.
    ///
    /// On error the session is left exactly as it was.
    pub fn execute(&mut self, command: Command) -> TallyResult<Report> {
        debug!(?command, "Executing command");
        match command {
            Command::ViewResults => Ok(Report::Results(self.results())),
            Command::SetLimit(input) => {
                self.limit = DisplayLimit::parse(&input)?;
                Ok(Report::LimitChanged(self.limit))
            }
            Command::Exclude(word) => self.exclusions.add(&word).map(Report::Excluded),
            Command::Include(word) => self.exclusions.remove(&word).map(Report::Included),
            Command::ListExclusions => Ok(Report::Exclusions(
                self.exclusions.list().map(str::to_string).collect(),
            )),
            Command::ClearExclusions => Ok(Report::Cleared(self.exclusions.clear())),
            Command::Lookup(word) => {
                let count = lookup(&word, &self.table)?;
                Ok(Report::Count {
                    word: crate::normalize::normalize(word.trim()),
                    count,
                })
            }
            Command::Quit => Ok(Report::Goodbye),
        }
    }
}
