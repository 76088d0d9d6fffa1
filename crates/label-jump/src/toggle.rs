//! The multi-jump selection set.

use std::collections::BTreeSet;

/// Set of toggled label glyphs. Each update produces a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleSet {
    glyphs: BTreeSet<char>,
}

impl ToggleSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `actions` into the set: each glyph flips its membership.
    #[must_use]
    pub fn toggled(&self, actions: &[char]) -> Self {
        let glyphs = actions.iter().fold(self.glyphs.clone(), |mut set, &glyph| {
            if !set.remove(&glyph) {
                set.insert(glyph);
            }
            set
        });
        Self { glyphs }
    }

    /// Returns `true` if `glyph` is toggled on.
    pub fn contains(&self, glyph: char) -> bool {
        self.glyphs.contains(&glyph)
    }

    /// Number of toggled glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if nothing is toggled.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Toggled glyphs in code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.iter().copied()
    }
}

impl FromIterator<char> for ToggleSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let actions: Vec<char> = iter.into_iter().collect();
        Self::new().toggled(&actions)
    }
}
