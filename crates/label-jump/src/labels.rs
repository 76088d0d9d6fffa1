//! Label assignment.
//!
//! The labelable set is the match list of the *shortest* prefix whose count fits the label
//! budget. Labels are handed out by index in that set and only emitted for positions that also
//! match the full needle. A filtered-out position keeps its glyph unused, so a labeling can be
//! non-contiguous (`A`, `C` without `B`) whenever the accepted prefix is shorter than the needle.
//! That keeps a glyph pinned to the same candidate while the user is still typing.

use crate::config::LabelAlphabet;
use crate::matcher::{MatchPosition, PrefixTable, Span};

/// A candidate paired with its label glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledMatch {
    /// Where the candidate starts.
    pub position: MatchPosition,
    /// The glyph drawn over it.
    pub label: char,
}

/// Result of labeling one keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labeling {
    /// Labeled candidates in discovery order.
    pub labeled: Vec<LabeledMatch>,
    /// Number of full-needle matches, regardless of the label budget.
    pub total_matches: usize,
    /// Prefix length the labels were taken from, if any prefix fit the budget.
    pub prefix_len: Option<usize>,
}

impl Labeling {
    /// Position labeled with `glyph`.
    pub fn position_of(&self, glyph: char) -> Option<MatchPosition> {
        self.labeled
            .iter()
            .find(|m| m.label == glyph)
            .map(|m| m.position)
    }
}

/// Shortest prefix length whose match count is within `budget`, with its matches.
pub fn labelable_matches(table: &PrefixTable, budget: usize) -> Option<(usize, &[MatchPosition])> {
    table.iter().find(|(_, matches)| matches.len() <= budget)
}

/// Assign labels from `alphabet` to the matches in `table`.
pub fn assign_labels(table: &PrefixTable, alphabet: &LabelAlphabet) -> Labeling {
    let targets = table.full_matches();
    let Some((prefix_len, labelable)) = labelable_matches(table, alphabet.len()) else {
        return Labeling {
            labeled: Vec::new(),
            total_matches: targets.len(),
            prefix_len: None,
        };
    };

    // Both lists are sorted in discovery order, which is `MatchPosition`'s `Ord`.
    let labeled = labelable
        .iter()
        .enumerate()
        .filter(|(_, position)| targets.binary_search(position).is_ok())
        .filter_map(|(idx, &position)| {
            alphabet
                .glyph(idx)
                .map(|label| LabeledMatch { position, label })
        })
        .collect();

    Labeling {
        labeled,
        total_matches: targets.len(),
        prefix_len: Some(prefix_len),
    }
}

/// Match `needle` against `spans` and label the result.
pub fn label_matches(spans: &[Span], needle: &str, alphabet: &LabelAlphabet) -> Labeling {
    let table = PrefixTable::build(spans, needle);
    assign_labels(&table, alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(texts: &[&str]) -> Vec<Span> {
        texts
            .iter()
            .enumerate()
            .map(|(id, text)| Span::new(id, *text))
            .collect()
    }

    fn alphabet(glyphs: &str) -> LabelAlphabet {
        LabelAlphabet::new(glyphs.chars()).unwrap()
    }

    #[test]
    fn test_gap_labeling_keeps_index() {
        let labeling = label_matches(&spans(&["cat", "cow", "car"]), "ca", &alphabet("ABC"));
        assert_eq!(labeling.prefix_len, Some(1));
        assert_eq!(
            labeling.labeled,
            vec![
                LabeledMatch {
                    position: MatchPosition::new(0, 0),
                    label: 'A'
                },
                LabeledMatch {
                    position: MatchPosition::new(2, 0),
                    label: 'C'
                },
            ]
        );
        assert_eq!(labeling.total_matches, 2);
        assert_eq!(labeling.position_of('B'), None);
    }

    #[test]
    fn test_longer_prefix_used_when_short_one_overflows() {
        // "a" occurs 4 times, "ab" twice.
        let labeling = label_matches(&spans(&["ab xa ab a"]), "ab", &alphabet("XY"));
        assert_eq!(labeling.prefix_len, Some(2));
        let labels: Vec<char> = labeling.labeled.iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!['X', 'Y']);
        assert_eq!(labeling.position_of('Y'), Some(MatchPosition::new(0, 6)));
    }

    #[test]
    fn test_empty_needle() {
        let labeling = label_matches(&spans(&["anything"]), "", &alphabet("AB"));
        assert_eq!(labeling, Labeling::default());
    }

    #[test]
    fn test_no_matches() {
        let labeling = label_matches(&spans(&["hello"]), "zz", &alphabet("AB"));
        // "z" has zero matches, which fits any budget.
        assert_eq!(labeling.prefix_len, Some(1));
        assert!(labeling.labeled.is_empty());
        assert_eq!(labeling.total_matches, 0);
    }
}
