//! Session configuration: the label alphabet and the label styles.
//!
//! A [`JumpConfig`] is handed to every session explicitly. It can be built in code, or loaded
//! from a small TOML document:
//!
//! ```toml
//! alphabet = "ASDFGHJKL"
//!
//! [styles.labeled]
//! foreground = "red"
//!
//! [styles.toggled]
//! foreground = "black"
//! background = "yellow"
//! bold = true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered set of distinct label glyphs.
///
/// The alphabet length is the label budget: at most that many candidates can carry a label at
/// once. Membership is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelAlphabet {
    glyphs: Vec<char>,
}

impl LabelAlphabet {
    /// Build an alphabet from an ordered glyph sequence.
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self, ConfigError> {
        let mut collected: Vec<char> = Vec::new();
        for glyph in glyphs {
            if collected.contains(&glyph) {
                return Err(ConfigError::DuplicateGlyph(glyph));
            }
            collected.push(glyph);
        }
        if collected.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(Self { glyphs: collected })
    }

    /// Number of glyphs (the label budget).
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always `false`; an alphabet cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Returns `true` if `ch` is one of the glyphs.
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains(&ch)
    }

    /// Glyph at `index`, if within the budget.
    pub fn glyph(&self, index: usize) -> Option<char> {
        self.glyphs.get(index).copied()
    }

    /// All glyphs in order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for LabelAlphabet {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl TryFrom<String> for LabelAlphabet {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.chars())
    }
}

impl From<LabelAlphabet> for String {
    fn from(value: LabelAlphabet) -> Self {
        value.glyphs.into_iter().collect()
    }
}

/// How a single label is drawn. Colors are names the host understands (e.g. `"red"`, `"#ff8800"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Glyph color.
    pub foreground: Option<String>,
    /// Cell background color.
    pub background: Option<String>,
    /// Render the glyph bold.
    pub bold: bool,
}

/// The two visual classes used while a session is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyles {
    /// Style for an ordinary label.
    pub labeled: LabelStyle,
    /// Style for a label currently toggled on in a multi-jump session.
    pub toggled: LabelStyle,
}

impl Default for LabelStyles {
    fn default() -> Self {
        Self {
            labeled: LabelStyle {
                foreground: Some("red".to_string()),
                background: None,
                bold: false,
            },
            toggled: LabelStyle {
                foreground: Some("black".to_string()),
                background: Some("yellow".to_string()),
                bold: true,
            },
        }
    }
}

/// Configuration passed into every session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// Label glyphs, in assignment order.
    pub alphabet: LabelAlphabet,
    /// Label styles.
    pub styles: LabelStyles,
}

impl JumpConfig {
    /// Config with a custom alphabet and default styles.
    pub fn with_alphabet(alphabet: LabelAlphabet) -> Self {
        Self {
            alphabet,
            styles: LabelStyles::default(),
        }
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// The label budget (alphabet length).
    pub fn budget(&self) -> usize {
        self.alphabet.len()
    }
}
