//! # Prioritizer Module
//!
//! The context side of the Strategy pattern: holds at most one selected
//! [`Strategy`] and delegates ordering to it. The prioritizer itself imposes
//! no ordering policy.

use crate::notice::Notice;
use crate::strategy::{Strategy, StrategyKind};

/// Holds the currently selected strategy, if any.
#[derive(Debug, Default)]
pub struct Prioritizer {
    strategy: Option<Box<dyn Strategy>>,
}

impl Prioritizer {
    /// Create a prioritizer with no strategy selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strategy(strategy: impl Strategy + 'static) -> Self {
        Self {
            strategy: Some(Box::new(strategy)),
        }
    }

    /// Replace the selected strategy. Any previous selection is dropped.
    pub fn set_strategy(&mut self, strategy: impl Strategy + 'static) {
        self.strategy = Some(Box::new(strategy));
    }

    /// Select one of the built-in strategies by kind.
    pub fn set_kind(&mut self, kind: StrategyKind) {
        self.strategy = Some(kind.build());
    }

    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    #[must_use]
    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    #[must_use]
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    /// Reorder `tasks` with the selected strategy.
    ///
    /// With no strategy selected, `tasks` is left untouched and
    /// [`Notice::no_strategy`] is returned.
    pub fn apply_strategy(&self, tasks: &mut [String]) -> Notice {
        match &self.strategy {
            Some(strategy) => strategy.prioritize(tasks),
            None => Notice::no_strategy(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
