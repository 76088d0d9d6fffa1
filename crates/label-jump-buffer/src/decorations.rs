//! Transient label decorations.
//!
//! Labels are virtual text anchored at a document position. They never modify the text and
//! are replaced wholesale on every keystroke of a session.

use crate::position::Position;
use label_jump::{LabelStyle, RenderedLabel, VisualClass};

/// One label drawn over the first character of a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDecoration {
    /// Anchor position; the glyph covers the character starting here.
    pub position: Position,
    /// Label glyph.
    pub glyph: char,
    /// Visual class.
    pub class: VisualClass,
    /// Style to draw with.
    pub style: LabelStyle,
}

impl From<&RenderedLabel<Position>> for LabelDecoration {
    fn from(label: &RenderedLabel<Position>) -> Self {
        Self {
            position: label.position,
            glyph: label.glyph,
            class: label.class,
            style: label.style.clone(),
        }
    }
}
