//! [`HostAdapter`] implementation over a [`Document`].

use crate::decorations::LabelDecoration;
use crate::document::Document;
use crate::position::Position;
use label_jump::{HostAdapter, RenderedLabel, Span, Status};
use log::trace;

/// Lowercase `ch` when its lowercase form is a single char; otherwise keep it.
///
/// Keeping the mapping 1:1 means a char offset into a span is also a char offset into the
/// document.
pub fn lowercase_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Borrowing host that drives a session against `document`.
///
/// Besides the document changes, the host records what the query widget would display: the
/// latest status and, after label actions were consumed in multi-jump mode, the replacement
/// query text.
#[derive(Debug)]
pub struct BufferHost<'a> {
    document: &'a mut Document,
    status: Option<Status>,
    query_reset: Option<String>,
}

impl<'a> BufferHost<'a> {
    /// Wrap `document`.
    pub fn new(document: &'a mut Document) -> Self {
        Self {
            document,
            status: None,
            query_reset: None,
        }
    }

    /// The wrapped document.
    pub fn document(&self) -> &Document {
        self.document
    }

    /// Last status shown.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Take the pending query replacement, if the session asked for one.
    pub fn take_query_reset(&mut self) -> Option<String> {
        self.query_reset.take()
    }
}

impl HostAdapter for BufferHost<'_> {
    type Position = Position;

    fn visible_spans(&self) -> Vec<Span> {
        self.document
            .visible_line_ranges()
            .into_iter()
            .enumerate()
            .map(|(id, lines)| {
                let chars = self.document.line_range_to_chars(lines);
                let text: String = self
                    .document
                    .slice(chars)
                    .chars()
                    .map(lowercase_char)
                    .collect();
                Span::new(id, text)
            })
            .collect()
    }

    fn resolve(&self, span_id: usize, offset: usize) -> Position {
        let ranges = self.document.visible_line_ranges();
        let Some(lines) = ranges.get(span_id) else {
            trace!("span {} is no longer visible", span_id);
            return self.document.char_to_position(self.document.char_count());
        };
        let start = self.document.line_range_to_chars(lines.clone()).start;
        self.document.char_to_position(start + offset)
    }

    fn render_labels(&mut self, labels: &[RenderedLabel<Position>]) {
        self.document
            .set_labels(labels.iter().map(LabelDecoration::from).collect());
    }

    fn clear_labels(&mut self) {
        self.document.clear_labels();
    }

    fn set_primary_cursor(&mut self, position: Position) {
        self.document.set_cursor(position);
    }

    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.document.set_selection(anchor, head);
    }

    fn replace_cursors(&mut self, positions: Vec<Position>) {
        self.document.set_carets(&positions);
    }

    fn current_selection_anchor(&self) -> Position {
        self.document.primary_selection().start
    }

    fn show_status(&mut self, status: &Status) {
        self.status = Some(*status);
    }

    fn reset_query(&mut self, needle: &str) {
        self.query_reset = Some(needle.to_string());
    }
}
