//! Pieces command implementation - catalog listing.

use super::{CliError, OutputFormat, output};
use betza::catalog;
use std::path::Path;

/// Execute the pieces command.
///
/// # Errors
///
/// Returns an error if the variants file cannot be read or parsed, or if
/// JSON serialization fails.
pub(crate) fn execute(
    file: Option<&Path>,
    variant: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut pieces = match file {
        Some(path) => catalog::load_variants(path)?,
        None => catalog::builtin_pieces(),
    };

    if let Some(wanted) = variant {
        pieces.retain(|p| p.variant == wanted);
    }

    match format {
        OutputFormat::Text => print!("{}", output::format_pieces_text(&pieces)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pieces)?),
    }

    Ok(())
}
