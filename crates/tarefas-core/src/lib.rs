//! # Tarefas Core
//!
//! The pure pattern engine behind the `tarefas` binary.
//!
//! Two independent patterns live here:
//! - **Command**: actions encapsulated as values with `execute` and `undo`,
//!   driven by a [`CommandHistory`] that undoes them in LIFO order.
//! - **Strategy**: swappable task orderings behind the [`Strategy`] trait,
//!   selected at runtime through a [`Prioritizer`].
//!
//! Nothing in this crate prints. Every operation returns a [`Notice`] that
//! the caller renders however it wants.
//!
//! ```
//! use tarefas_core::{Alphabetical, CommandHistory, GenerateReport, Prioritizer, SendEmail};
//!
//! let mut history = CommandHistory::new();
//! history.execute_command(Box::new(SendEmail));
//! history.execute_command(Box::new(GenerateReport));
//! assert_eq!(history.undo_last().message, "Relatório descartado.");
//!
//! let mut tasks = vec!["b".to_string(), "a".to_string()];
//! let mut prioritizer = Prioritizer::new();
//! prioritizer.set_strategy(Alphabetical);
//! prioritizer.apply_strategy(&mut tasks);
//! assert_eq!(tasks, ["a", "b"]);
//! ```

pub mod command;
pub mod error;
pub mod history;
pub mod notice;
pub mod prioritizer;
pub mod strategy;

pub use command::{Command, CommandAction, GenerateReport, SendEmail};
pub use error::TarefasError;
pub use history::CommandHistory;
pub use notice::{Notice, NoticeKind};
pub use prioritizer::Prioritizer;
pub use strategy::{Alphabetical, ByLength, Strategy, StrategyKind};

/// Tasks used by the walkthroughs when the caller supplies none.
pub const DEFAULT_TASKS: [&str; 3] = ["Enviar Email", "Gerar Relatório", "Corrigir Bug"];

/// Owned copy of [`DEFAULT_TASKS`].
#[must_use]
pub fn default_tasks() -> Vec<String> {
    DEFAULT_TASKS.iter().map(|t| (*t).to_string()).collect()
}
