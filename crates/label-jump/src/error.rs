use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building or loading a [`JumpConfig`](crate::JumpConfig).
pub enum ConfigError {
    #[error("I/O error: {0}")]
    /// Reading the config file failed.
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    /// The config file is not valid TOML or has the wrong shape.
    Toml(#[from] toml::de::Error),

    #[error("label alphabet must contain at least one glyph")]
    /// The alphabet was empty.
    EmptyAlphabet,

    #[error("label alphabet contains '{0}' more than once")]
    /// The same glyph appeared twice in the alphabet.
    DuplicateGlyph(char),
}
