use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the CLI layer.
///
/// Unknown strategy or action names never get here: clap parses them
/// through `FromStr` and reports a usage error.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read tasks from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid task list in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize notice: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
