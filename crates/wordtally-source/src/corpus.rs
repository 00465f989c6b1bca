//! Loading a page section as plain text.

use tracing::info;

use crate::error::SourceResult;
use crate::extract::{extract_section, SectionMarkers};
use crate::fetch::PageSource;
use crate::markup::strip_markup;
use crate::tokenize::tokenize;

/// The plain text of one page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    /// Build a corpus from markup that is already in memory.
    pub fn from_markup(markup: &str, markers: &SectionMarkers) -> SourceResult<Self> {
        let section = extract_section(markup, markers)?;
        Ok(Self {
            text: strip_markup(section),
        })
    }

    /// Fetch a page and reduce the marked section to plain text.
    pub async fn load(
        source: &dyn PageSource,
        location: &str,
        markers: &SectionMarkers,
    ) -> SourceResult<Self> {
        let page = source.fetch(location).await?;
        let corpus = Self::from_markup(&page, markers)?;
        info!(
            location,
            characters = corpus.text.len(),
            "Loaded section text"
        );
        Ok(corpus)
    }

    /// Raw tokens of the section, in reading order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        tokenize(&self.text)
    }
}
