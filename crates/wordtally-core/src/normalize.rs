//! Token normalization.
//!
//! The stripped page text has every non-letter replaced by a space, so
//! ordinal and possessive suffixes ("20th", "3rd", "1990's") survive as
//! standalone fragments. Those fragments are discarded here.

/// Fragments left behind by numerals and apostrophes.
const RESERVED_FRAGMENTS: &[&str] = &["s", "rd", "nd", "th"];

/// Canonicalize a raw token into a word.
///
/// Returns an empty string when the token should be discarded. The first
/// character is uppercased and the rest lowercased, so "THE", "the" and
/// "The" all count as "The".
pub fn normalize(token: &str) -> String {
    if token.trim().is_empty() || RESERVED_FRAGMENTS.contains(&token) {
        return String::new();
    }

    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut word = String::with_capacity(token.len());
    push_upper(&mut word, first);
    word.extend(chars.flat_map(char::to_lowercase));
    word
}

/// Uppercase `c` into `out`, keeping it as-is when the uppercase form
/// expands to several characters (e.g. 'ß' → "SS").
fn push_upper(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => out.push(u),
        _ => out.push(c),
    }
}
