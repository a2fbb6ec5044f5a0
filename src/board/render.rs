//! ASCII renderer for compiled move sets.

use crate::board::Board;
use crate::moves::{Move, MoveType, Offset};

/// Render the board with every reachable move marked.
///
/// Output format:
/// ```text
/// ┌───────────┐
/// │ · x · x · │
/// │ x · · · x │
/// │ · · @ · · │
/// │ x · o · x │
/// │ · x · x · │
/// └───────────┘
///
/// Legend: @=piece  o=blocker  x=move or capture  m=move only  c=capture only
/// ```
///
/// Unreachable offsets are omitted; later records overwrite earlier ones on
/// the same square.
#[must_use]
pub fn render_ascii(board: &Board, moves: &[Move]) -> String {
    let size = usize::from(board.size());
    let half = board.half_extent();
    let mut grid = vec![vec!['·'; size]; size];

    for blocker in board.blockers() {
        if let Some((row, col)) = cell(half, size, blocker) {
            grid[row][col] = 'o';
        }
    }

    for mv in board.reachable_moves(moves) {
        let marker = match mv.move_type {
            MoveType::MoveCapture => 'x',
            MoveType::Move => 'm',
            MoveType::Capture => 'c',
        };
        if let Some((row, col)) = cell(half, size, mv.offset) {
            grid[row][col] = marker;
        }
    }

    if let Some((row, col)) = cell(half, size, Offset::new(0, 0)) {
        grid[row][col] = '@';
    }

    let mut output = String::new();
    output.push('┌');
    for _ in 0..(size * 2 + 1) {
        output.push('─');
    }
    output.push_str("┐\n");
    for row in &grid {
        output.push_str("│ ");
        for &ch in row {
            output.push(ch);
            output.push(' ');
        }
        output.push_str("│\n");
    }
    output.push('└');
    for _ in 0..(size * 2 + 1) {
        output.push('─');
    }
    output.push_str("┘\n");

    output.push_str("\nLegend: @=piece  o=blocker  x=move or capture  m=move only  c=capture only\n");

    output
}

/// Map a centered offset to grid indices (row 0 is the top rank).
fn cell(half: i32, size: usize, offset: Offset) -> Option<(usize, usize)> {
    let row = usize::try_from(half - offset.y).ok()?;
    let col = usize::try_from(offset.x + half).ok()?;
    (row < size && col < size).then_some((row, col))
}
