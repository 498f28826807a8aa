//! # Tarefas Library
//!
//! This library exposes the tarefas CLI modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod error;

pub use error::CliError;

// Re-export tarefas_core for convenience
pub use tarefas_core;
