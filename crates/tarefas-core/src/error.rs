//! # Error Module
//!
//! Errors raised while turning user-supplied names into pattern values.
//!
//! Executing, undoing and prioritizing never fail: the degraded paths
//! (empty history, no strategy) are reported as [`crate::Notice`]s.

use thiserror::Error;

/// Errors from the tarefas core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TarefasError {
    /// No strategy is registered under this name.
    #[error("unknown strategy '{0}' (expected one of: alphabetical, length)")]
    UnknownStrategy(String),

    /// No command action is registered under this name.
    #[error("unknown action '{0}' (expected one of: email, report, undo)")]
    UnknownAction(String),
}
