//! # wordtally Source
//!
//! Turns a web page into a stream of raw word tokens: fetch the page,
//! cut out one section, strip the markup and split on spaces.

pub mod corpus;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod markup;
pub mod tokenize;

pub use corpus::Corpus;
pub use error::{SourceError, SourceResult};
pub use extract::{extract_section, SectionMarkers};
pub use fetch::{FileSource, HttpSource, PageSource};
pub use markup::strip_markup;
pub use tokenize::tokenize;

/// Page the tool reads when no other location is given.
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/Microsoft";
