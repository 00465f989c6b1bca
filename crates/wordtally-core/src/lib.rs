//! wordtally Core Library
//!
//! Normalization, frequency counting, ranking and querying of the words
//! in a single text corpus.

pub mod counter;
pub mod error;
pub mod exclusion;
pub mod limit;
pub mod normalize;
pub mod query;
pub mod rank;
pub mod session;

pub use counter::{count, FrequencyTable};
pub use error::{TallyError, TallyResult};
pub use exclusion::ExclusionSet;
pub use limit::DisplayLimit;
pub use normalize::normalize;
pub use query::{lookup, top_n, TopN};
pub use rank::{rank, RankStrategy, RankedEntry, RankedList};
pub use session::model::{Command, CorpusSummary, MenuChoice, Report};
pub use session::Session;
