//! Section extraction.

use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// Heading that opens the section read by default.
pub const DEFAULT_START_MARKER: &str =
    r#"<h2><span class="mw-headline" id="History">History</span></h2>"#;

/// Heading of the section that follows it.
pub const DEFAULT_END_MARKER: &str =
    r#"<h2><span class="mw-headline" id="Corporate_affairs">Corporate affairs</span></h2>"#;

/// The pair of literal markers delimiting a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarkers {
    pub start: String,
    pub end: String,
}

impl SectionMarkers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for SectionMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_START_MARKER, DEFAULT_END_MARKER)
    }
}

/// Text between the first start marker and the first end marker after it.
pub fn extract_section<'a>(markup: &'a str, markers: &SectionMarkers) -> SourceResult<&'a str> {
    let start = markup
        .find(&markers.start)
        .map(|index| index + markers.start.len())
        .ok_or_else(|| SourceError::marker_not_found(&markers.start))?;

    let length = markup[start..]
        .find(&markers.end)
        .ok_or_else(|| SourceError::marker_not_found(&markers.end))?;

    debug!(start, length, "Extracted section");
    Ok(&markup[start..start + length])
}
