#![warn(missing_docs)]
//! Label Jump - Headless Jump-to-Label Engine
//!
//! # Overview
//!
//! `label-jump` moves a cursor (or extends a selection, or places several cursors) to any
//! on-screen occurrence of a short typed string. Every candidate is overlaid with a
//! single-glyph label; typing the label commits.
//!
//! The crate does no rendering and owns no document. A host implements [`HostAdapter`] to
//! supply the visible text and to apply the results.
//!
//! # Pipeline
//!
//! ```text
//! raw query ─► Query::parse ─► (needle, actions)
//!                                   │
//!  HostAdapter::visible_spans ─► PrefixTable::build ─► assign_labels ─► Labeling
//!                                                                          │
//!                                      Session (jump / select / multi-jump) ◄┘
//!                                          │
//!                        render_labels / set_primary_cursor / replace_cursors
//! ```
//!
//! # Labeling rules
//!
//! - The needle is everything before the first alphabet glyph; glyphs after it are actions.
//! - Labels come from the shortest needle prefix with at most `alphabet.len()` matches.
//! - Only full-needle matches are labeled, but each keeps the glyph of its index in that
//!   prefix's list, so labels can skip glyphs.
//! - The reported match count is the number of full-needle matches, labeled or not.
//!
//! # Quick Start
//!
//! ```rust
//! use label_jump::{LabelAlphabet, MatchPosition, Span, label_matches};
//!
//! let alphabet = LabelAlphabet::new("ABC".chars()).unwrap();
//! let spans = vec![Span::new(0, "cat"), Span::new(1, "car"), Span::new(2, "cow")];
//!
//! let labeling = label_matches(&spans, "ca", &alphabet);
//! assert_eq!(labeling.total_matches, 2);
//! assert_eq!(labeling.position_of('A'), Some(MatchPosition::new(0, 0)));
//! assert_eq!(labeling.position_of('B'), Some(MatchPosition::new(1, 0)));
//! assert_eq!(labeling.position_of('C'), None);
//! ```
//!
//! # Module Description
//!
//! - [`query`] - splits the keystroke buffer into needle and label actions
//! - [`matcher`] - per-prefix match table over the visible spans
//! - [`labels`] - label assignment
//! - [`toggle`] - multi-jump selection set
//! - [`session`] - the jump / select / multi-jump state machine
//! - [`host`] - the host adapter interface
//! - [`commands`] - `start_jump`, `start_multi_jump`, `start_select`
//! - [`config`] - alphabet and label styles

pub mod commands;
pub mod config;
mod error;
pub mod host;
pub mod labels;
pub mod matcher;
pub mod query;
pub mod session;
pub mod status;
pub mod toggle;

pub use commands::{
    JumpCommand, UnknownCommand, start, start_jump, start_multi_jump, start_select,
};
pub use config::{JumpConfig, LabelAlphabet, LabelStyle, LabelStyles};
pub use error::ConfigError;
pub use host::{HostAdapter, RenderedLabel, VisualClass};
pub use labels::{LabeledMatch, Labeling, assign_labels, label_matches, labelable_matches};
pub use matcher::{MatchPosition, PrefixTable, Span};
pub use query::Query;
pub use session::{LabelTarget, Mode, Session, SessionState};
pub use status::Status;
pub use toggle::ToggleSet;
