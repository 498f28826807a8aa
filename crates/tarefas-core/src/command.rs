//! # Command Module
//!
//! Actions encapsulated as values.
//!
//! A [`Command`] knows how to perform its effect and how to reverse it.
//! Commands do not keep a history of their own; [`crate::CommandHistory`]
//! owns them once executed.

use crate::error::TarefasError;
use crate::notice::Notice;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// COMMAND TRAIT
// =============================================================================

/// An invocable, undoable unit of action.
pub trait Command {
    /// Stable identifier, used as the `source` of the notices it produces.
    fn name(&self) -> &str;

    /// Perform the action.
    fn execute(&mut self) -> Notice;

    /// Reverse the effect of the last `execute`.
    fn undo(&mut self) -> Notice;
}

// =============================================================================
// CONCRETE COMMANDS
// =============================================================================

/// Sends the daily email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendEmail;

impl Command for SendEmail {
    fn name(&self) -> &str {
        "send_email"
    }

    fn execute(&mut self) -> Notice {
        Notice::executed(self.name(), "Email enviado.")
    }

    fn undo(&mut self) -> Notice {
        Notice::undone(self.name(), "Envio de email desfeito.")
    }
}

/// Generates the task report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport;

impl Command for GenerateReport {
    fn name(&self) -> &str {
        "generate_report"
    }

    fn execute(&mut self) -> Notice {
        Notice::executed(self.name(), "Relatório gerado.")
    }

    fn undo(&mut self) -> Notice {
        Notice::undone(self.name(), "Relatório descartado.")
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

/// One step of a command script: run a command, or undo the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Email,
    Report,
    Undo,
}

impl CommandAction {
    /// The script walked through by the `commands` walkthrough: two commands,
    /// one undo each, and a final undo on the emptied history.
    pub const WALKTHROUGH: [CommandAction; 5] = [
        CommandAction::Email,
        CommandAction::Report,
        CommandAction::Undo,
        CommandAction::Undo,
        CommandAction::Undo,
    ];

    /// Build the command this action executes. `None` for [`CommandAction::Undo`].
    #[must_use]
    pub fn command(self) -> Option<Box<dyn Command>> {
        match self {
            CommandAction::Email => Some(Box::new(SendEmail)),
            CommandAction::Report => Some(Box::new(GenerateReport)),
            CommandAction::Undo => None,
        }
    }
}

impl FromStr for CommandAction {
    type Err = TarefasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "send_email" | "send-email" => Ok(CommandAction::Email),
            "report" | "relatorio" | "generate_report" | "generate-report" => {
                Ok(CommandAction::Report)
            }
            "undo" | "desfazer" => Ok(CommandAction::Undo),
            _ => Err(TarefasError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandAction::Email => "email",
            CommandAction::Report => "report",
            CommandAction::Undo => "undo",
        };
        f.write_str(name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
