#![warn(missing_docs)]
//! `label-jump-buffer` - an in-memory document host for `label-jump`.
//!
//! [`Document`] keeps rope-backed text (`ropey`), a viewport, folded line ranges, multi-cursor
//! selections and transient label decorations. [`BufferHost`] borrows a document and implements
//! [`label_jump::HostAdapter`] over it:
//!
//! - each contiguous run of visible lines becomes one span
//! - span text is lowercased char by char, so offsets map straight back to the document
//! - labels become [`LabelDecoration`]s on the document
//!
//! ```rust
//! use label_jump::{JumpConfig, SessionState, start_jump};
//! use label_jump_buffer::{BufferHost, Document, Position};
//! use std::sync::Arc;
//!
//! let mut doc = Document::new("let cat = 1;\nlet car = 2;\n", 10);
//! let mut host = BufferHost::new(&mut doc);
//! let mut session = start_jump(Some(&mut host), Arc::new(JumpConfig::default())).unwrap();
//!
//! session.on_query_changed(&mut host, "ca");
//! assert_eq!(session.on_query_changed(&mut host, "caB"), SessionState::Committed);
//! assert_eq!(doc.cursor_position(), Position::new(1, 4));
//! ```

pub mod decorations;
pub mod document;
pub mod host;
pub mod position;
mod selection_set;

pub use decorations::LabelDecoration;
pub use document::{Document, Fold, Viewport};
pub use host::{BufferHost, lowercase_char};
pub use position::{Position, Selection, SelectionDirection};
