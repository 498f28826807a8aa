use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use tarefas::CliError;
use tarefas::cli::{
    Cli, Commands, cmd_commands, cmd_demo, cmd_prioritize, cmd_strategies, render_notices,
};

fn run(cli: Cli) -> Result<(), CliError> {
    let format = cli.output_format();
    let notices = match cli.command {
        Commands::Commands { actions } => cmd_commands(&actions)?,
        Commands::Prioritize {
            strategy,
            file,
            tasks,
        } => cmd_prioritize(strategy, file.as_deref(), tasks)?,
        Commands::Demo => cmd_demo()?,
        Commands::Strategies => {
            let mut stdout = io::stdout().lock();
            for line in cmd_strategies() {
                writeln!(stdout, "{line}")?;
            }
            return Ok(());
        }
    };

    render_notices(&notices, format, &mut io::stdout().lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout only carries notices
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    debug!(?cli, "Parsed arguments");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
