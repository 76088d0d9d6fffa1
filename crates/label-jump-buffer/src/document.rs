//! Headless document: rope text, viewport, folds, selections and label decorations.

use crate::decorations::LabelDecoration;
use crate::position::{Position, Selection};
use crate::selection_set::normalize_selections;
use ropey::Rope;
use std::ops::Range;

/// The window of logical lines currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First logical line shown.
    pub scroll_top: usize,
    /// Number of rows available. Folded lines take no rows.
    pub height: usize,
}

/// A collapsed line range. `start_line` stays visible; the lines after it up to `end_line`
/// (inclusive) are hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fold {
    /// Header line of the fold.
    pub start_line: usize,
    /// Last hidden line (inclusive).
    pub end_line: usize,
}

impl Fold {
    /// Returns `true` if `line` is hidden by this fold.
    pub fn hides(&self, line: usize) -> bool {
        line > self.start_line && line <= self.end_line
    }
}

/// A text document with the state a jump session reads and writes.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    viewport: Viewport,
    folds: Vec<Fold>,
    selections: Vec<Selection>,
    primary_index: usize,
    labels: Vec<LabelDecoration>,
}

impl Document {
    /// Create a document showing `viewport_height` rows from the top.
    pub fn new(text: &str, viewport_height: usize) -> Self {
        Self {
            rope: Rope::from_str(text),
            viewport: Viewport {
                scroll_top: 0,
                height: viewport_height,
            },
            folds: Vec::new(),
            selections: vec![Selection::caret(Position::new(0, 0))],
            primary_index: 0,
            labels: Vec::new(),
        }
    }

    /// The full text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total line count (a trailing newline starts one more, empty, line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Text of `line` without its line break.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let text = self.rope.line(line).to_string();
        Some(text.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Number of characters on `line`, excluding the line break.
    pub fn line_len(&self, line: usize) -> usize {
        self.line_text(line)
            .map(|text| text.chars().count())
            .unwrap_or(0)
    }

    /// Clamp `position` to an existing line and column.
    pub fn clamp(&self, position: Position) -> Position {
        let line = position.line.min(self.line_count().saturating_sub(1));
        Position::new(line, position.column.min(self.line_len(line)))
    }

    /// Position of the char at `char_offset` (clamped to the end of the text).
    pub fn char_to_position(&self, char_offset: usize) -> Position {
        let offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        Position::new(line, offset - self.rope.line_to_char(line))
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport.height = height;
    }

    /// Scroll so that `line` is the first row.
    pub fn set_scroll_top(&mut self, line: usize) {
        self.viewport.scroll_top = line.min(self.line_count().saturating_sub(1));
    }

    /// Collapse `start_line + 1 ..= end_line`. Returns `false` if the range hides nothing.
    pub fn fold(&mut self, start_line: usize, end_line: usize) -> bool {
        let end_line = end_line.min(self.line_count().saturating_sub(1));
        if end_line <= start_line {
            return false;
        }
        self.folds.retain(|f| f.start_line != start_line);
        self.folds.push(Fold {
            start_line,
            end_line,
        });
        self.folds.sort_by_key(|f| f.start_line);
        true
    }

    /// Expand every fold.
    pub fn unfold_all(&mut self) {
        self.folds.clear();
    }

    /// Active folds, ordered by start line.
    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    /// Returns `true` if `line` is hidden by a fold.
    pub fn is_line_hidden(&self, line: usize) -> bool {
        self.folds.iter().any(|f| f.hides(line))
    }

    /// Logical lines shown in the viewport, top to bottom.
    pub fn visible_lines(&self) -> Vec<usize> {
        (self.viewport.scroll_top..self.line_count())
            .filter(|&line| !self.is_line_hidden(line))
            .take(self.viewport.height)
            .collect()
    }

    /// Visible lines grouped into contiguous half-open ranges. A fold splits a range in two.
    pub fn visible_line_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges: Vec<Range<usize>> = Vec::new();
        for line in self.visible_lines() {
            match ranges.last_mut() {
                Some(range) if range.end == line => range.end = line + 1,
                _ => ranges.push(line..line + 1),
            }
        }
        ranges
    }

    /// Char range covered by a line range, including the line breaks inside it.
    pub fn line_range_to_chars(&self, lines: Range<usize>) -> Range<usize> {
        let start = self.rope.line_to_char(lines.start.min(self.rope.len_lines()));
        let end = if lines.end >= self.rope.len_lines() {
            self.rope.len_chars()
        } else {
            self.rope.line_to_char(lines.end)
        };
        start..end
    }

    /// Text in a char range.
    pub fn slice(&self, chars: Range<usize>) -> String {
        self.rope.slice(chars).to_string()
    }

    /// All selections, sorted.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// The primary selection.
    pub fn primary_selection(&self) -> Selection {
        self.selections
            .get(self.primary_index)
            .copied()
            .unwrap_or_else(|| Selection::caret(Position::new(0, 0)))
    }

    /// Active end of the primary selection.
    pub fn cursor_position(&self) -> Position {
        self.primary_selection().end
    }

    /// Collapse to a single caret.
    pub fn set_cursor(&mut self, position: Position) {
        self.selections = vec![Selection::caret(self.clamp(position))];
        self.primary_index = 0;
    }

    /// Replace everything with a single selection.
    pub fn set_selection(&mut self, anchor: Position, head: Position) {
        self.selections = vec![Selection::new(self.clamp(anchor), self.clamp(head))];
        self.primary_index = 0;
    }

    /// Replace everything with one caret per position. The first position becomes primary.
    /// An empty list leaves the selections unchanged.
    pub fn set_carets(&mut self, positions: &[Position]) {
        if positions.is_empty() {
            return;
        }
        let carets = positions
            .iter()
            .map(|&p| Selection::caret(self.clamp(p)))
            .collect();
        let (selections, primary_index) = normalize_selections(carets, 0);
        self.selections = selections;
        self.primary_index = primary_index;
    }

    /// Rendered labels.
    pub fn labels(&self) -> &[LabelDecoration] {
        &self.labels
    }

    /// Replace the rendered labels.
    pub fn set_labels(&mut self, labels: Vec<LabelDecoration>) {
        self.labels = labels;
    }

    /// The label drawn at `position`, if any.
    pub fn label_at(&self, position: Position) -> Option<&LabelDecoration> {
        self.labels.iter().find(|l| l.position == position)
    }

    /// Remove every label.
    pub fn clear_labels(&mut self) {
        self.labels.clear();
    }
}
