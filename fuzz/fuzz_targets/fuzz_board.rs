#![no_main]

//! Board reachability fuzzer.
//!
//! Exercises path tracing against arbitrary blocker layouts, including
//! externally-constructed move records the compiler would never emit.

use arbitrary::Arbitrary;
use betza::{Board, HopType, JumpType, Move, MoveType, Offset};
use libfuzzer_sys::fuzz_target;

/// Structured input for board fuzzing.
#[derive(Arbitrary, Debug)]
struct BoardInput {
    /// Board edge length (capped below).
    size: u16,
    /// Blocker squares.
    blockers: Vec<(i8, i8)>,
    /// Raw move records to probe with.
    records: Vec<RawMove>,
    /// Notation to compile and probe alongside the raw records.
    notation: String,
}

/// A fuzzer-generated move record.
#[derive(Arbitrary, Debug)]
struct RawMove {
    x: i8,
    y: i8,
    atom_x: i8,
    atom_y: i8,
    kind: u8,
    hop: u8,
}

fuzz_target!(|input: BoardInput| {
    let size = input.size.clamp(1, 25);
    let Some(mut board) = Board::new(size) else {
        return;
    };
    for (x, y) in input.blockers.iter().take(64) {
        board.toggle_blocker(Offset::new(i32::from(*x), i32::from(*y)));
    }

    for raw in input.records.iter().take(64) {
        let mv = Move {
            offset: Offset::new(i32::from(raw.x), i32::from(raw.y)),
            move_type: MoveType::MoveCapture,
            hop_type: match raw.hop % 3 {
                1 => Some(HopType::Cannon),
                2 => Some(HopType::Grasshopper),
                _ => None,
            },
            jump_type: match raw.kind % 3 {
                1 => JumpType::Jumping,
                2 => JumpType::NonJumping,
                _ => JumpType::Normal,
            },
            atom: 'N',
            atom_offset: Offset::new(i32::from(raw.atom_x), i32::from(raw.atom_y)),
            initial_only: false,
        };
        // Must never panic, whatever the record claims about its atom.
        let _ = board.is_reachable(&mv);
    }

    // Cap digit runs to two characters to avoid OOM from huge step counts.
    let mut notation = String::new();
    let mut digits = 0;
    for c in input.notation.chars().take(24) {
        if c.is_ascii_digit() {
            digits += 1;
            if digits > 2 {
                continue;
            }
        } else {
            digits = 0;
        }
        notation.push(c);
    }
    let moves = betza::compile_on_board(&notation, size);
    let reachable = board.reachable_moves(&moves);
    assert!(reachable.len() <= moves.len());
    for mv in reachable {
        assert!(board.in_bounds(mv.offset));
    }
});
