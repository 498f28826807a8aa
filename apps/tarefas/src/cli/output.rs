//! Notice rendering.

use std::io::Write;

use tarefas_core::Notice;

use crate::error::CliError;

/// How notices are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One message per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Write `notices` to `writer` in the given format.
pub fn render_notices<W: Write>(
    notices: &[Notice],
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), CliError> {
    for notice in notices {
        match format {
            OutputFormat::Text => writeln!(writer, "{notice}")?,
            OutputFormat::Json => {
                let line = serde_json::to_string(notice).map_err(CliError::Serialize)?;
                writeln!(writer, "{line}")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
