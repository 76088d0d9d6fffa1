//! Prefix matching over the visible text.
//!
//! For a needle of length `n`, [`PrefixTable::build`] records, for every prefix length
//! `1..=n`, each position where the text starts with that prefix. Offsets are **character
//! offsets** into the span text, not byte offsets.
//!
//! Lists are in discovery order: span order first, then ascending offset. Label assignment
//! depends on that order.

/// One contiguous visible text region, already lowercased by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Host-defined identifier, handed back to the host when resolving positions.
    pub id: usize,
    /// Lowercased text of the region.
    pub text: String,
}

impl Span {
    /// Create a new span.
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// A candidate position: the span's index in the supplied list plus a char offset into its text.
///
/// Ordering is `(span, offset)` ascending, which is the discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchPosition {
    /// Index of the span in the list passed to [`PrefixTable::build`].
    pub span: usize,
    /// Character offset within the span text.
    pub offset: usize,
}

impl MatchPosition {
    /// Create a new position.
    pub fn new(span: usize, offset: usize) -> Self {
        Self { span, offset }
    }
}

/// Matches for every non-empty prefix of a needle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    /// `by_len[j - 1]` holds the matches for the prefix of length `j`.
    by_len: Vec<Vec<MatchPosition>>,
}

impl PrefixTable {
    /// Scan `spans` for every prefix of `needle`.
    ///
    /// The needle is compared as-is; only the span text is expected to be lowercased.
    /// An empty needle yields an empty table.
    pub fn build(spans: &[Span], needle: &str) -> Self {
        let needle: Vec<char> = needle.chars().collect();
        let mut by_len: Vec<Vec<MatchPosition>> = vec![Vec::new(); needle.len()];
        if needle.is_empty() {
            return Self { by_len };
        }

        for (span_index, span) in spans.iter().enumerate() {
            let text: Vec<char> = span.text.chars().collect();
            for offset in 0..text.len() {
                // A mismatch at prefix length j also rules out every longer prefix.
                for (j, &expected) in needle.iter().enumerate() {
                    match text.get(offset + j) {
                        Some(&ch) if ch == expected => {
                            by_len[j].push(MatchPosition::new(span_index, offset));
                        }
                        _ => break,
                    }
                }
            }
        }

        Self { by_len }
    }

    /// Length of the needle this table was built for (in chars).
    pub fn needle_len(&self) -> usize {
        self.by_len.len()
    }

    /// Matches for the prefix of length `prefix_len`. Empty for `0` or anything past the needle.
    pub fn matches(&self, prefix_len: usize) -> &[MatchPosition] {
        prefix_len
            .checked_sub(1)
            .and_then(|idx| self.by_len.get(idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Matches for the full needle.
    pub fn full_matches(&self) -> &[MatchPosition] {
        self.matches(self.needle_len())
    }

    /// Iterate `(prefix_len, matches)` in increasing prefix length.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[MatchPosition])> {
        self.by_len
            .iter()
            .enumerate()
            .map(|(idx, matches)| (idx + 1, matches.as_slice()))
    }
}
