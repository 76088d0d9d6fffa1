//! The interaction state machine.
//!
//! A [`Session`] lives from the moment a command opens the query widget until it commits or
//! is cancelled. The host drives it with three transitions:
//!
//! - [`Session::on_query_changed`] for every edit of the query text
//! - [`Session::on_accept`] for the explicit accept key
//! - [`Session::on_cancel`] for dismissal
//!
//! Each keystroke recomputes spans, matches and labels from the host's current state; the
//! session only keeps the latest query, the latest glyph-to-position map and, in multi-jump
//! mode, the toggle set.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut session = Session::new(Mode::Jump, Arc::new(JumpConfig::default()));
//! session.on_query_changed(&mut host, "ca");
//! if session.on_query_changed(&mut host, "caB").is_terminal() {
//!     // cursor moved to the candidate labeled `B`
//! }
//! ```

use crate::config::JumpConfig;
use crate::host::{HostAdapter, RenderedLabel, VisualClass};
use crate::labels::assign_labels;
use crate::matcher::PrefixTable;
use crate::query::Query;
use crate::status::Status;
use crate::toggle::ToggleSet;
use log::{debug, info, trace};
use std::sync::Arc;

/// What committing does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Move the primary cursor to the chosen candidate.
    Jump,
    /// Select from the current anchor to the chosen candidate.
    Select,
    /// Toggle any number of candidates, then place one cursor on each on accept.
    MultiJump,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting keystrokes.
    Open,
    /// Cursor/selection changes were applied (or deliberately skipped) and the session ended.
    Committed,
    /// Dismissed without touching the document.
    Cancelled,
}

impl SessionState {
    /// Returns `true` for `Committed` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::Open)
    }
}

/// A labeled candidate resolved to host coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTarget<P> {
    /// Label glyph.
    pub glyph: char,
    /// Host position of the candidate.
    pub position: P,
}

/// One open jump/select/multi-jump interaction.
#[derive(Debug, Clone)]
pub struct Session<P> {
    mode: Mode,
    config: Arc<JumpConfig>,
    state: SessionState,
    query: Query,
    targets: Vec<LabelTarget<P>>,
    total_matches: usize,
    selection: ToggleSet,
    status: Status,
}

impl<P: Clone + PartialEq + std::fmt::Debug> Session<P> {
    /// Open a session in `mode`.
    pub fn new(mode: Mode, config: Arc<JumpConfig>) -> Self {
        Self {
            mode,
            config,
            state: SessionState::Open,
            query: Query::default(),
            targets: Vec::new(),
            total_matches: 0,
            selection: ToggleSet::new(),
            status: Status::Prompt,
        }
    }

    /// Session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Most recently parsed query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Current labels, in label order.
    pub fn labels(&self) -> &[LabelTarget<P>] {
        &self.targets
    }

    /// Host position currently labeled with `glyph`.
    pub fn target(&self, glyph: char) -> Option<&P> {
        self.targets
            .iter()
            .find(|t| t.glyph == glyph)
            .map(|t| &t.position)
    }

    /// Toggled glyphs (multi-jump).
    pub fn selection(&self) -> &ToggleSet {
        &self.selection
    }

    /// Full-needle match count of the last keystroke.
    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    /// Current status message.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Show the initial prompt.
    pub fn announce<H>(&mut self, host: &mut H)
    where
        H: HostAdapter<Position = P>,
    {
        host.show_status(&self.status);
    }

    /// The query text changed to `raw`.
    pub fn on_query_changed<H>(&mut self, host: &mut H, raw: &str) -> SessionState
    where
        H: HostAdapter<Position = P>,
    {
        if self.state.is_terminal() {
            debug!(
                "query change after session ended ({:?}), ignoring",
                self.state
            );
            return self.state;
        }

        let query = Query::parse(raw, &self.config.alphabet);
        let spans = host.visible_spans();
        let table = PrefixTable::build(&spans, &query.needle);
        let labeling = assign_labels(&table, &self.config.alphabet);
        debug!(
            "needle={:?} actions={:?} spans={} prefix_len={:?} labeled={} total={}",
            query.needle,
            query.actions,
            spans.len(),
            labeling.prefix_len,
            labeling.labeled.len(),
            labeling.total_matches
        );

        self.targets = labeling
            .labeled
            .iter()
            .filter_map(|m| {
                let span = spans.get(m.position.span)?;
                Some(LabelTarget {
                    glyph: m.label,
                    position: host.resolve(span.id, m.position.offset),
                })
            })
            .collect();
        self.total_matches = labeling.total_matches;
        self.query = query;

        match self.mode {
            Mode::Jump | Mode::Select => {
                self.render(host);
                if let Some(glyph) = self.query.first_action() {
                    self.commit_single(host, glyph);
                    return self.finish(host, SessionState::Committed);
                }
            }
            Mode::MultiJump => {
                if !self.query.actions.is_empty() {
                    self.selection = self.selection.toggled(&self.query.actions);
                    host.reset_query(&self.query.needle);
                }
                self.render(host);
            }
        }

        self.status = Status::for_matches(
            &self.query.needle,
            self.total_matches,
            self.config.budget(),
            self.mode,
            self.selection.len(),
        );
        host.show_status(&self.status);
        SessionState::Open
    }

    /// The accept key was pressed.
    ///
    /// Multi-jump commits one cursor per toggled glyph that still resolves; with nothing
    /// toggled the session stays open. Jump and select simply end.
    pub fn on_accept<H>(&mut self, host: &mut H) -> SessionState
    where
        H: HostAdapter<Position = P>,
    {
        if self.state.is_terminal() {
            debug!("accept after session ended ({:?}), ignoring", self.state);
            return self.state;
        }

        if self.mode != Mode::MultiJump {
            return self.finish(host, SessionState::Committed);
        }

        if self.selection.is_empty() {
            self.status = Status::NothingToggled;
            host.show_status(&self.status);
            return SessionState::Open;
        }

        let positions: Vec<P> = self
            .targets
            .iter()
            .filter(|t| self.selection.contains(t.glyph))
            .map(|t| t.position.clone())
            .collect();
        if positions.is_empty() {
            trace!(
                "none of {:?} resolve any more, leaving cursors unchanged",
                self.selection.iter().collect::<String>()
            );
        } else {
            host.replace_cursors(positions);
        }
        self.finish(host, SessionState::Committed)
    }

    /// The query widget was dismissed.
    pub fn on_cancel<H>(&mut self, host: &mut H) -> SessionState
    where
        H: HostAdapter<Position = P>,
    {
        if self.state.is_terminal() {
            return self.state;
        }
        self.finish(host, SessionState::Cancelled)
    }

    fn commit_single<H>(&self, host: &mut H, glyph: char)
    where
        H: HostAdapter<Position = P>,
    {
        let Some(target) = self.target(glyph).cloned() else {
            trace!("label {:?} is not on screen", glyph);
            return;
        };
        match self.mode {
            Mode::Jump => host.set_primary_cursor(target),
            Mode::Select => {
                let anchor = host.current_selection_anchor();
                host.set_selection(anchor, target);
            }
            Mode::MultiJump => {}
        }
    }

    fn render<H>(&self, host: &mut H)
    where
        H: HostAdapter<Position = P>,
    {
        let styles = &self.config.styles;
        let labels: Vec<RenderedLabel<P>> = self
            .targets
            .iter()
            .map(|t| {
                let toggled = self.mode == Mode::MultiJump && self.selection.contains(t.glyph);
                let (class, style) = if toggled {
                    (VisualClass::Toggled, &styles.toggled)
                } else {
                    (VisualClass::Labeled, &styles.labeled)
                };
                RenderedLabel {
                    position: t.position.clone(),
                    glyph: t.glyph,
                    class,
                    style: style.clone(),
                }
            })
            .collect();
        host.render_labels(&labels);
    }

    fn finish<H>(&mut self, host: &mut H, state: SessionState) -> SessionState
    where
        H: HostAdapter<Position = P>,
    {
        host.clear_labels();
        self.targets.clear();
        self.state = state;
        info!("{:?} session ended: {:?}", self.mode, state);
        state
    }
}
