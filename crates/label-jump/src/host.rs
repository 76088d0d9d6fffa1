//! The host adapter interface.
//!
//! A host is whatever owns the document and the screen: it provides the visible text, resolves
//! match positions into its own coordinates, draws labels, and applies cursor changes. Sessions
//! only talk to the host through [`HostAdapter`].

use crate::config::LabelStyle;
use crate::matcher::Span;
use crate::status::Status;
use std::fmt::Debug;

/// Visual class of a rendered label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualClass {
    /// An ordinary label.
    Labeled,
    /// A label toggled on in a multi-jump session.
    Toggled,
}

/// A label the host should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLabel<P> {
    /// Host position of the candidate's first character.
    pub position: P,
    /// Label glyph.
    pub glyph: char,
    /// Visual class.
    pub class: VisualClass,
    /// Configured style for `class`.
    pub style: LabelStyle,
}

/// Host-side collaborator of a session.
pub trait HostAdapter {
    /// Host-native position type.
    type Position: Clone + PartialEq + Debug;

    /// Visible text regions in display order, lowercased. Called once per keystroke.
    fn visible_spans(&self) -> Vec<Span>;

    /// Map a char `offset` within the span identified by `span_id` to a host position.
    fn resolve(&self, span_id: usize, offset: usize) -> Self::Position;

    /// Replace all rendered labels with `labels`.
    fn render_labels(&mut self, labels: &[RenderedLabel<Self::Position>]);

    /// Remove all rendered labels.
    fn clear_labels(&mut self);

    /// Collapse to a single caret at `position`.
    fn set_primary_cursor(&mut self, position: Self::Position);

    /// Select from `anchor` to `head`.
    fn set_selection(&mut self, anchor: Self::Position, head: Self::Position);

    /// Replace every cursor/selection with carets at `positions`.
    fn replace_cursors(&mut self, positions: Vec<Self::Position>);

    /// Anchor of the current primary selection.
    fn current_selection_anchor(&self) -> Self::Position;

    /// Show `status` in the query widget.
    fn show_status(&mut self, _status: &Status) {}

    /// Reset the query widget's text to `needle` once label actions were consumed.
    fn reset_query(&mut self, _needle: &str) {}
}
