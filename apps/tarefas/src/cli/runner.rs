//! Subcommand implementations.

use std::path::Path;

use tarefas_core::{CommandAction, CommandHistory, Notice, Prioritizer, StrategyKind};
use tracing::{debug, info};

use super::input::resolve_tasks;
use crate::error::CliError;

/// Demo tasks. "Deploy" is short enough that alphabetical and length
/// orders differ, so the strategy switch shows in the output.
pub const DEMO_TASKS: [&str; 4] = ["Enviar Email", "Gerar Relatório", "Corrigir Bug", "Deploy"];

fn trace_notices(notices: &[Notice]) {
    for notice in notices {
        if notice.is_degraded() {
            info!(kind = ?notice.kind, "{}", notice.message);
        } else {
            debug!(kind = ?notice.kind, source = ?notice.source, "{}", notice.message);
        }
    }
}

/// Replay `actions` through a fresh command history.
///
/// An empty script runs [`CommandAction::WALKTHROUGH`]. Never fails; the
/// `Result` keeps the signature in line with the other `cmd_*` functions.
pub fn cmd_commands(actions: &[CommandAction]) -> Result<Vec<Notice>, CliError> {
    let script: &[CommandAction] = if actions.is_empty() {
        &CommandAction::WALKTHROUGH
    } else {
        actions
    };
    debug!(steps = script.len(), "Replaying command script");

    let mut history = CommandHistory::new();
    let notices = history.run(script.iter().copied());
    debug!(remaining = history.len(), "Command script finished");

    trace_notices(&notices);
    Ok(notices)
}

/// Prioritize tasks with `strategy`, or report that none is selected.
pub fn cmd_prioritize(
    strategy: Option<StrategyKind>,
    file: Option<&Path>,
    tasks: Vec<String>,
) -> Result<Vec<Notice>, CliError> {
    let mut tasks = resolve_tasks(file, tasks)?;

    let mut prioritizer = Prioritizer::new();
    if let Some(kind) = strategy {
        prioritizer.set_kind(kind);
    }
    debug!(strategy = ?prioritizer.strategy_name(), count = tasks.len(), "Prioritizing");

    let notices = vec![prioritizer.apply_strategy(&mut tasks)];
    trace_notices(&notices);
    Ok(notices)
}

/// Both walkthroughs: the command script, then prioritization with no
/// strategy, alphabetical, and length applied to the same [`DEMO_TASKS`].
/// Fails only if [`cmd_commands`] does.
pub fn cmd_demo() -> Result<Vec<Notice>, CliError> {
    let mut notices = cmd_commands(&[])?;

    let mut tasks: Vec<String> = DEMO_TASKS.iter().map(|t| (*t).to_string()).collect();
    let mut prioritizer = Prioritizer::new();
    let mut prioritized = vec![prioritizer.apply_strategy(&mut tasks)];

    for kind in StrategyKind::ALL {
        prioritizer.set_kind(kind);
        prioritized.push(prioritizer.apply_strategy(&mut tasks));
    }

    trace_notices(&prioritized);
    notices.extend(prioritized);
    Ok(notices)
}

/// One line per available strategy: padded name, then description.
pub fn cmd_strategies() -> Vec<String> {
    StrategyKind::ALL
        .iter()
        .map(|kind| format!("{:<13}{}", kind.name(), kind.description()))
        .collect()
}
