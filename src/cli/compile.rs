//! Compile command implementation.

use super::{CliError, OutputFormat, output};

/// Execute the compile command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(
    notation: &str,
    board: Option<u16>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let moves = match board {
        Some(size) => betza::compile_on_board(notation, size),
        None => betza::compile(notation),
    };

    match format {
        OutputFormat::Text => print!("{}", output::format_moves_text(notation, &moves)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&moves)?),
    }

    Ok(())
}
