//! # Strategy Module
//!
//! Swappable task orderings.
//!
//! Both built-in strategies sort in place with the standard library's stable
//! sort, so tasks that compare equal keep their input order.

use crate::error::TarefasError;
use crate::notice::Notice;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// STRATEGY TRAIT
// =============================================================================

/// An ordering policy for a list of tasks.
pub trait Strategy: fmt::Debug {
    /// Stable identifier, used as the `source` of the notices it produces.
    fn name(&self) -> &'static str;

    /// Reorder `tasks` in place and report the result.
    fn prioritize(&self, tasks: &mut [String]) -> Notice;
}

// =============================================================================
// BUILT-IN STRATEGIES
// =============================================================================

/// Unicode code-point order. Locale-independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alphabetical;

impl Strategy for Alphabetical {
    fn name(&self) -> &'static str {
        "alphabetical"
    }

    fn prioritize(&self, tasks: &mut [String]) -> Notice {
        tasks.sort();
        Notice::prioritized(self.name(), "Tarefas ordenadas alfabeticamente", tasks)
    }
}

/// Shortest task first, counted in `char`s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByLength;

impl Strategy for ByLength {
    fn name(&self) -> &'static str {
        "length"
    }

    fn prioritize(&self, tasks: &mut [String]) -> Notice {
        tasks.sort_by_key(|t| t.chars().count());
        Notice::prioritized(self.name(), "Tarefas ordenadas por tamanho", tasks)
    }
}

// =============================================================================
// STRATEGY KIND
// =============================================================================

/// Name-addressable selector for the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Alphabetical,
    ByLength,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Alphabetical, StrategyKind::ByLength];

    /// Canonical name, as accepted by `from_str`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Alphabetical => Alphabetical.name(),
            StrategyKind::ByLength => ByLength.name(),
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::Alphabetical => "code-point order (A before B, locale-independent)",
            StrategyKind::ByLength => "shortest first; equal lengths keep their input order",
        }
    }

    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Alphabetical => Box::new(Alphabetical),
            StrategyKind::ByLength => Box::new(ByLength),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = TarefasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabetical" | "alpha" | "alfabetica" => Ok(StrategyKind::Alphabetical),
            "length" | "by-length" | "by_length" | "tamanho" => Ok(StrategyKind::ByLength),
            _ => Err(TarefasError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn alphabetical_orders_default_tasks() {
        let mut tasks = crate::default_tasks();
        let notice = Alphabetical.prioritize(&mut tasks);
        assert_eq!(tasks, ["Corrigir Bug", "Enviar Email", "Gerar Relatório"]);
        assert_eq!(notice.kind, NoticeKind::Prioritized);
        assert_eq!(
            notice.message,
            r#"Tarefas ordenadas alfabeticamente: ["Corrigir Bug", "Enviar Email", "Gerar Relatório"]"#
        );
    }

    #[test]
    fn alphabetical_is_code_point_order() {
        let mut tasks = owned(&["b", "B", "a", "Á"]);
        Alphabetical.prioritize(&mut tasks);
        assert_eq!(tasks, ["B", "a", "b", "Á"]);
    }

    #[test]
    fn by_length_orders_shortest_first() {
        let mut tasks = owned(&["aaa", "a", "aa"]);
        let notice = ByLength.prioritize(&mut tasks);
        assert_eq!(tasks, ["a", "aa", "aaa"]);
        assert_eq!(notice.tasks.as_deref(), Some(tasks.as_slice()));
    }

    #[test]
    fn by_length_counts_chars_not_bytes() {
        // "óó" is 4 bytes but 2 chars.
        let mut tasks = owned(&["abc", "óó"]);
        ByLength.prioritize(&mut tasks);
        assert_eq!(tasks, ["óó", "abc"]);
    }

    #[test]
    fn by_length_keeps_ties_in_input_order() {
        let mut tasks = owned(&["zz", "x", "aa", "y"]);
        ByLength.prioritize(&mut tasks);
        assert_eq!(tasks, ["x", "y", "zz", "aa"]);
    }

    #[test]
    fn empty_list_is_fine() {
        let mut tasks: Vec<String> = Vec::new();
        let notice = ByLength.prioritize(&mut tasks);
        assert_eq!(notice.message, "Tarefas ordenadas por tamanho: []");
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!("Alpha".parse::<StrategyKind>(), Ok(StrategyKind::Alphabetical));
        assert_eq!("tamanho".parse::<StrategyKind>(), Ok(StrategyKind::ByLength));
        assert_eq!(
            "random".parse::<StrategyKind>(),
            Err(TarefasError::UnknownStrategy("random".to_string()))
        );
    }

    #[test]
    fn kind_builds_matching_strategy() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.build().name(), kind.name());
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
        }
    }
}
