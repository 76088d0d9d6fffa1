//! Entry points exposed to the invoking environment.
//!
//! Each command opens exactly one [`Session`]. Without a host context (no active editor) a
//! command does nothing and returns `None`.

use crate::config::JumpConfig;
use crate::host::HostAdapter;
use crate::session::{Mode, Session};
use log::debug;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The three session-opening commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpCommand {
    /// `start_jump`
    Jump,
    /// `start_multi_jump`
    MultiJump,
    /// `start_select`
    Select,
}

impl JumpCommand {
    /// All commands, in registration order.
    pub const ALL: [JumpCommand; 3] = [
        JumpCommand::Jump,
        JumpCommand::MultiJump,
        JumpCommand::Select,
    ];

    /// Registered command name.
    pub fn name(self) -> &'static str {
        match self {
            JumpCommand::Jump => "start_jump",
            JumpCommand::MultiJump => "start_multi_jump",
            JumpCommand::Select => "start_select",
        }
    }

    /// Session mode the command opens.
    pub fn mode(self) -> Mode {
        match self {
            JumpCommand::Jump => Mode::Jump,
            JumpCommand::MultiJump => Mode::MultiJump,
            JumpCommand::Select => Mode::Select,
        }
    }
}

impl fmt::Display for JumpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown command name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for JumpCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JumpCommand::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Open a session for `command` against `host`.
pub fn start<H: HostAdapter>(
    command: JumpCommand,
    host: Option<&mut H>,
    config: Arc<JumpConfig>,
) -> Option<Session<H::Position>> {
    let Some(host) = host else {
        debug!("{}: no active editor, not starting", command);
        return None;
    };
    let mut session = Session::new(command.mode(), config);
    session.announce(host);
    Some(session)
}

/// `start_jump`
pub fn start_jump<H: HostAdapter>(
    host: Option<&mut H>,
    config: Arc<JumpConfig>,
) -> Option<Session<H::Position>> {
    start(JumpCommand::Jump, host, config)
}

/// `start_multi_jump`
pub fn start_multi_jump<H: HostAdapter>(
    host: Option<&mut H>,
    config: Arc<JumpConfig>,
) -> Option<Session<H::Position>> {
    start(JumpCommand::MultiJump, host, config)
}

/// `start_select`
pub fn start_select<H: HostAdapter>(
    host: Option<&mut H>,
    config: Arc<JumpConfig>,
) -> Option<Session<H::Position>> {
    start(JumpCommand::Select, host, config)
}
