//! Tokenization of stripped text.

/// Split plain text on single spaces.
///
/// Leading or trailing spaces yield empty tokens; the normalizer
/// discards them.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_spaces() {
        let tokens: Vec<_> = tokenize("Microsoft was founded").collect();
        assert_eq!(tokens, vec!["Microsoft", "was", "founded"]);
    }

    #[test]
    fn test_edges_produce_empty_tokens() {
        let tokens: Vec<_> = tokenize(" a b ").collect();
        assert_eq!(tokens, vec!["", "a", "b", ""]);
    }

    #[test]
    fn test_empty_text() {
        let tokens: Vec<_> = tokenize("").collect();
        assert_eq!(tokens, vec![""]);
    }
}
