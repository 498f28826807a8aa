//! # History Module
//!
//! The invoker for [`Command`]s.
//!
//! Executed commands are kept on a LIFO stack. The most recently executed,
//! not yet undone command is always on top. There is no redo stack: an
//! undone command is dropped.

use crate::command::{Command, CommandAction};
use crate::notice::Notice;
use std::fmt;

/// Executes commands and undoes them in reverse order.
#[derive(Default)]
pub struct CommandHistory {
    executed: Vec<Box<dyn Command>>,
}

impl CommandHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `command` and push it on the history.
    pub fn execute_command(&mut self, mut command: Box<dyn Command>) -> Notice {
        let notice = command.execute();
        self.executed.push(command);
        notice
    }

    /// Pop the last executed command and undo it.
    ///
    /// On an empty history this returns [`Notice::nothing_to_undo`] and
    /// leaves the history as it was.
    pub fn undo_last(&mut self) -> Notice {
        match self.executed.pop() {
            Some(mut command) => command.undo(),
            None => Notice::nothing_to_undo(),
        }
    }

    /// Replay a script of actions, returning every notice in order.
    pub fn run<I>(&mut self, actions: I) -> Vec<Notice>
    where
        I: IntoIterator<Item = CommandAction>,
    {
        actions
            .into_iter()
            .map(|action| match action.command() {
                Some(command) => self.execute_command(command),
                None => self.undo_last(),
            })
            .collect()
    }

    /// Number of commands that can still be undone.
    #[must_use]
    pub fn len(&self) -> usize {
        self.executed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }

    /// Name of the command the next `undo_last` would reverse.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.executed.last().map(|c| c.name())
    }

    /// Names of the commands in the history, oldest first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.executed.iter().map(|c| c.name())
    }
}

impl fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHistory")
            .field("executed", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
