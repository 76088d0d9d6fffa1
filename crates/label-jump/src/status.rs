//! User-visible status messages.
//!
//! None of these are errors: an empty query, zero matches, and too many matches are ordinary
//! states of a session.

use crate::session::Mode;
use std::fmt;

/// What the query widget should tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing typed yet.
    Prompt,
    /// The needle matches nothing on screen.
    NoMatches,
    /// More matches than labels.
    TooMany {
        /// Full-needle match count.
        total: usize,
    },
    /// Matches are labeled.
    Labeled {
        /// Full-needle match count.
        total: usize,
        /// Session mode, for the call to action.
        mode: Mode,
        /// Toggled labels (multi-jump only).
        toggled: usize,
    },
    /// Multi-jump accept with an empty selection set.
    NothingToggled,
}

impl Status {
    /// Derive the status for one keystroke.
    pub fn for_matches(
        needle: &str,
        total: usize,
        budget: usize,
        mode: Mode,
        toggled: usize,
    ) -> Self {
        if total == 0 {
            if needle.is_empty() {
                Status::Prompt
            } else {
                Status::NoMatches
            }
        } else if total > budget {
            Status::TooMany { total }
        } else {
            Status::Labeled {
                total,
                mode,
                toggled,
            }
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Prompt => write!(f, "Type lowercase letters or symbols"),
            Status::NoMatches => write!(f, "No matches"),
            Status::TooMany { total } => write!(f, "{} matches (type more to narrow down)", total),
            Status::Labeled { total, mode, .. } if *mode == Mode::Jump => {
                write!(f, "{} matches. Type label to jump", total)
            }
            Status::Labeled { total, mode, .. } if *mode == Mode::Select => {
                write!(f, "{} matches. Type label to select", total)
            }
            Status::Labeled { total, toggled, .. } => write!(
                f,
                "{} matches. Type labels to toggle ({} selected, Enter to accept)",
                total, toggled
            ),
            Status::NothingToggled => {
                f.write_str("Nothing selected. Type labels to toggle, Enter to accept")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_states() {
        assert_eq!(
            Status::for_matches("", 0, 26, Mode::Jump, 0),
            Status::Prompt
        );
        assert_eq!(
            Status::for_matches("q", 0, 26, Mode::Jump, 0),
            Status::NoMatches
        );
        assert_eq!(
            Status::for_matches("e", 30, 26, Mode::Jump, 0),
            Status::TooMany { total: 30 }
        );
        assert_eq!(
            Status::for_matches("e", 26, 26, Mode::Select, 0),
            Status::Labeled {
                total: 26,
                mode: Mode::Select,
                toggled: 0
            }
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            Status::TooMany { total: 3 }.to_string(),
            "3 matches (type more to narrow down)"
        );
        assert_eq!(
            Status::Labeled {
                total: 2,
                mode: Mode::Jump,
                toggled: 0
            }
            .to_string(),
            "2 matches. Type label to jump"
        );
        assert_eq!(
            Status::Labeled {
                total: 4,
                mode: Mode::MultiJump,
                toggled: 1
            }
            .to_string(),
            "4 matches. Type labels to toggle (1 selected, Enter to accept)"
        );
    }
}
