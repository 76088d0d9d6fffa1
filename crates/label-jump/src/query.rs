//! Query parsing: one input field carries both the search needle and the label actions.
//!
//! Everything before the first alphabet glyph is the needle. From that point on, only alphabet
//! glyphs are kept (as actions, in order); any other character is dropped.

use crate::config::LabelAlphabet;

/// A parsed keystroke buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// The search string. Never contains an alphabet glyph.
    pub needle: String,
    /// Label glyphs typed after the needle, in order.
    pub actions: Vec<char>,
}

impl Query {
    /// Split `raw` into needle and actions.
    pub fn parse(raw: &str, alphabet: &LabelAlphabet) -> Self {
        let split = raw
            .char_indices()
            .find(|&(_, ch)| alphabet.contains(ch))
            .map(|(byte, _)| byte)
            .unwrap_or(raw.len());

        let needle = raw[..split].to_string();
        let actions = raw[split..]
            .chars()
            .filter(|&ch| alphabet.contains(ch))
            .collect();

        Self { needle, actions }
    }

    /// Length of the needle in characters.
    pub fn needle_len(&self) -> usize {
        self.needle.chars().count()
    }

    /// First action glyph, the only one jump and select modes look at.
    pub fn first_action(&self) -> Option<char> {
        self.actions.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Query {
        Query::parse(raw, &LabelAlphabet::default())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Query::default());
    }

    #[test]
    fn test_needle_only() {
        let query = parse("fn m");
        assert_eq!(query.needle, "fn m");
        assert!(query.actions.is_empty());
    }

    #[test]
    fn test_split_at_first_glyph_and_drop_trailing_noise() {
        let query = parse("caBx;C");
        assert_eq!(query.needle, "ca");
        assert_eq!(query.actions, vec!['B', 'C']);
        assert_eq!(query.first_action(), Some('B'));
    }

    #[test]
    fn test_only_glyphs() {
        let query = parse("AB");
        assert_eq!(query.needle, "");
        assert_eq!(query.actions, vec!['A', 'B']);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let alphabet = LabelAlphabet::new("asdf".chars()).unwrap();
        let query = Query::parse("QWEs", &alphabet);
        assert_eq!(query.needle, "QWE");
        assert_eq!(query.actions, vec!['s']);
    }

    #[test]
    fn test_multibyte_needle() {
        let query = parse("föö→A");
        assert_eq!(query.needle, "föö→");
        assert_eq!(query.needle_len(), 4);
        assert_eq!(query.actions, vec!['A']);
    }
}
