//! # Notice Module
//!
//! Structured record of what an operation did.
//!
//! Commands and strategies never write to stdout themselves. They hand back
//! a `Notice` and the application layer decides how to render it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message for an undo request on an empty history.
pub const NOTHING_TO_UNDO: &str = "Nada para desfazer.";

/// Message for a prioritization request with no strategy selected.
pub const NO_STRATEGY: &str = "Nenhuma estratégia definida.";

/// What kind of event a [`Notice`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A command ran its `execute`.
    Executed,
    /// A command ran its `undo`.
    Undone,
    /// Undo was requested with nothing in the history.
    NothingToUndo,
    /// A strategy reordered the tasks.
    Prioritized,
    /// Prioritization was requested with no strategy selected.
    NoStrategy,
}

/// Observable output of a single operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Human-readable line, as printed by the text renderer.
    pub message: String,
    /// Name of the command or strategy that produced the notice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Resulting order, for [`NoticeKind::Prioritized`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>, source: Option<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source,
            tasks: None,
        }
    }

    #[must_use]
    pub fn executed(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Executed, message, Some(source.into()))
    }

    #[must_use]
    pub fn undone(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Undone, message, Some(source.into()))
    }

    #[must_use]
    pub fn nothing_to_undo() -> Self {
        Self::new(NoticeKind::NothingToUndo, NOTHING_TO_UNDO, None)
    }

    /// Report a reordering. The message is `"{label}: {tasks:?}"`.
    #[must_use]
    pub fn prioritized(source: impl Into<String>, label: &str, tasks: &[String]) -> Self {
        let mut notice = Self::new(
            NoticeKind::Prioritized,
            format!("{label}: {tasks:?}"),
            Some(source.into()),
        );
        notice.tasks = Some(tasks.to_vec());
        notice
    }

    #[must_use]
    pub fn no_strategy() -> Self {
        Self::new(NoticeKind::NoStrategy, NO_STRATEGY, None)
    }

    /// True for the graceful-degradation notices (empty undo, no strategy).
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self.kind, NoticeKind::NothingToUndo | NoticeKind::NoStrategy)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// =============================================================================
// TESTS
// =============================================================================
