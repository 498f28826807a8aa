//! Property tests for the command history and the built-in strategies.

#![allow(clippy::unwrap_used, clippy::panic)]

use proptest::prelude::*;
use tarefas_core::Strategy as _;
use tarefas_core::{
    Alphabetical, ByLength, Command, CommandHistory, Notice, NoticeKind, Prioritizer,
};

/// Command identified by a number, so undo order can be observed.
struct Numbered {
    name: String,
}

impl Numbered {
    fn boxed(n: usize) -> Box<dyn Command> {
        Box::new(Self {
            name: format!("cmd-{n}"),
        })
    }
}

impl Command for Numbered {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self) -> Notice {
        Notice::executed(self.name.clone(), "executed")
    }

    fn undo(&mut self) -> Notice {
        Notice::undone(self.name.clone(), "undone")
    }
}

proptest! {
    /// N executes followed by N undos reverse the commands in strict LIFO order.
    #[test]
    fn undo_is_strictly_lifo(n in 0usize..40) {
        let mut history = CommandHistory::new();
        for i in 0..n {
            history.execute_command(Numbered::boxed(i));
        }
        prop_assert_eq!(history.len(), n);

        for i in (0..n).rev() {
            let notice = history.undo_last();
            prop_assert_eq!(notice.kind, NoticeKind::Undone);
            let expected = format!("cmd-{i}");
            prop_assert_eq!(notice.source.as_deref(), Some(expected.as_str()));
        }
        prop_assert!(history.is_empty());
    }

    /// Extra undos on an empty history only produce the degraded notice.
    #[test]
    fn extra_undos_keep_history_empty(n in 0usize..10, extra in 1usize..5) {
        let mut history = CommandHistory::new();
        for i in 0..n {
            history.execute_command(Numbered::boxed(i));
        }
        for _ in 0..n {
            history.undo_last();
        }
        for _ in 0..extra {
            prop_assert_eq!(history.undo_last(), Notice::nothing_to_undo());
            prop_assert_eq!(history.len(), 0);
        }
    }

    /// Alphabetical output is a sorted permutation of the input.
    #[test]
    fn alphabetical_sorts_permutation(mut tasks in prop::collection::vec("\\PC{0,12}", 0..20)) {
        let mut expected = tasks.clone();
        expected.sort();
        Alphabetical.prioritize(&mut tasks);
        prop_assert!(tasks.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(tasks, expected);
    }

    /// Length output is non-decreasing and equal lengths keep input order.
    #[test]
    fn by_length_is_stable(tasks in prop::collection::vec("[a-c]{0,4}", 0..20)) {
        let indexed: Vec<(usize, String)> = tasks.iter().cloned().enumerate().collect();
        let mut sorted = tasks.clone();
        ByLength.prioritize(&mut sorted);

        prop_assert!(sorted.windows(2).all(|w| w[0].chars().count() <= w[1].chars().count()));

        for len in 0..=4usize {
            let before: Vec<&String> = indexed
                .iter()
                .filter(|(_, t)| t.chars().count() == len)
                .map(|(_, t)| t)
                .collect();
            let after: Vec<&String> = sorted.iter().filter(|t| t.chars().count() == len).collect();
            prop_assert_eq!(before, after);
        }
    }

    /// With no strategy selected, any list is left untouched.
    #[test]
    fn no_strategy_is_noop(tasks in prop::collection::vec("\\PC{0,8}", 0..10)) {
        let prioritizer = Prioritizer::new();
        let mut applied = tasks.clone();
        let notice = prioritizer.apply_strategy(&mut applied);
        prop_assert_eq!(notice.kind, NoticeKind::NoStrategy);
        prop_assert_eq!(applied, tasks);
    }

    /// After a switch, only the newly selected strategy is applied.
    #[test]
    fn switch_applies_newest_strategy(tasks in prop::collection::vec("[a-e]{1,5}", 0..15)) {
        let mut prioritizer = Prioritizer::with_strategy(Alphabetical);
        let mut data = tasks.clone();
        prioritizer.apply_strategy(&mut data);

        prioritizer.set_strategy(ByLength);
        let mut expected = data.clone();
        ByLength.prioritize(&mut expected);

        let notice = prioritizer.apply_strategy(&mut data);
        prop_assert_eq!(notice.source.as_deref(), Some("length"));
        prop_assert_eq!(data, expected);
    }
}

#[test]
fn fixed_examples_from_the_walkthrough() {
    let mut prioritizer = Prioritizer::new();
    let mut tasks = vec!["b".to_string(), "a".to_string()];
    prioritizer.apply_strategy(&mut tasks);
    assert_eq!(tasks, ["b", "a"]);

    prioritizer.set_strategy(ByLength);
    let mut tasks = vec!["aaa".to_string(), "a".to_string(), "aa".to_string()];
    prioritizer.apply_strategy(&mut tasks);
    assert_eq!(tasks, ["a", "aa", "aaa"]);
}
