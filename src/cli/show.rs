//! Show command implementation - ASCII board rendering.

use super::CliError;
use betza::board::render_ascii;
use betza::{Board, Offset};

/// Execute the show command.
///
/// # Errors
///
/// Returns an error for a zero board size or a malformed blocker spec.
pub(crate) fn execute(notation: &str, board_size: u16, blockers: &[String]) -> Result<(), CliError> {
    let mut board =
        Board::new(board_size).ok_or_else(|| CliError::new("board size must be positive"))?;

    for spec in blockers {
        let offset = parse_blocker(spec)?;
        if !board.toggle_blocker(offset) {
            return Err(CliError::new(format!(
                "blocker {offset} is off the board or on the piece square"
            )));
        }
    }

    let moves = betza::compile_on_board(notation, board_size);
    print!("{}", render_ascii(&board, &moves));

    Ok(())
}

/// Parse an `X,Y` blocker spec into a centered offset.
fn parse_blocker(spec: &str) -> Result<Offset, CliError> {
    spec.split_once(',')
        .and_then(|(x, y)| {
            let x = x.trim().parse::<i32>().ok()?;
            let y = y.trim().parse::<i32>().ok()?;
            Some(Offset::new(x, y))
        })
        .ok_or_else(|| CliError::new(format!("invalid blocker '{spec}': expected X,Y")))
}
