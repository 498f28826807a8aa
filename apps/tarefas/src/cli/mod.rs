//! CLI module for the tarefas binary
//!
//! Each subcommand replays one of the pattern walkthroughs and returns the
//! resulting notices, which `main` renders on stdout.

mod input;
mod output;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tarefas_core::{CommandAction, StrategyKind};

pub use input::{load_tasks, resolve_tasks};
pub use output::{OutputFormat, render_notices};
pub use runner::{DEMO_TASKS, cmd_commands, cmd_demo, cmd_prioritize, cmd_strategies};

/// Tarefas - Command and Strategy patterns applied to a task list
#[derive(Parser, Debug)]
#[command(name = "tarefas")]
#[command(about = "Execute/undo task commands and prioritize tasks with swappable strategies")]
#[command(version)]
#[command(after_help = "EXAMPLES:
    # Run both walkthroughs
    tarefas demo

    # Send an email, generate a report, then undo twice
    tarefas commands email report undo undo

    # Order the default tasks by length
    tarefas prioritize --strategy length

    # Order tasks read from a file, as JSON lines
    tarefas --json prioritize --strategy alphabetical --file tasks.txt")]
pub struct Cli {
    /// Print notices as JSON lines instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute and undo commands through the command history
    Commands {
        /// Actions to replay in order: email, report, undo.
        /// Defaults to: email report undo undo undo
        actions: Vec<CommandAction>,
    },

    /// Prioritize tasks with a strategy (none selected if omitted)
    Prioritize {
        /// Strategy name: alphabetical or length
        #[arg(short, long)]
        strategy: Option<StrategyKind>,

        /// Read tasks from a file (one per line, or a JSON array for .json)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Tasks to prioritize, appended after the file tasks
        tasks: Vec<String>,
    },

    /// Run the command walkthrough followed by the strategy walkthrough
    Demo,

    /// List the available strategies
    Strategies,
}
