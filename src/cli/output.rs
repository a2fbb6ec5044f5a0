//! Output formatting utilities for CLI.

use betza::catalog::Piece;
use betza::{HopType, JumpType, Move, MoveType};

/// Format a compiled move list as human-readable text.
pub(super) fn format_moves_text(notation: &str, moves: &[Move]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Moves for \"{notation}\" ({} records)\n",
        moves.len()
    ));

    for mv in moves {
        output.push_str(&format!(
            "  ({:>3},{:>3})  {:<12}  {:<11}  atom {}",
            mv.offset.x,
            mv.offset.y,
            move_type_label(mv.move_type),
            jump_type_label(mv.jump_type),
            mv.atom,
        ));
        if let Some(hop) = mv.hop_type {
            output.push_str(match hop {
                HopType::Cannon => "  cannon hop",
                HopType::Grasshopper => "  grasshopper hop",
            });
        }
        if mv.initial_only {
            output.push_str("  initial only");
        }
        output.push('\n');
    }

    output
}

/// Format a piece catalog as human-readable text.
pub(super) fn format_pieces_text(pieces: &[Piece]) -> String {
    let mut output = String::new();

    let name_width = pieces.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for piece in pieces {
        output.push_str(&format!(
            "  {:<name_width$}  {:<12}  [{}]\n",
            piece.name, piece.betza, piece.variant
        ));
    }
    if pieces.is_empty() {
        output.push_str("  (no pieces)\n");
    }

    output
}

const fn move_type_label(move_type: MoveType) -> &'static str {
    match move_type {
        MoveType::MoveCapture => "move+capture",
        MoveType::Move => "move only",
        MoveType::Capture => "capture only",
    }
}

const fn jump_type_label(jump_type: JumpType) -> &'static str {
    match jump_type {
        JumpType::Normal => "normal",
        JumpType::Jumping => "jumping",
        JumpType::NonJumping => "non-jumping",
    }
}
