//! Compiler-to-board scenarios: real fairy pieces against blockers.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use betza::{Board, Move, MoveType, Offset, compile_on_board};

fn reachable_offsets(board: &Board, moves: &[Move]) -> Vec<Offset> {
    board.reachable_moves(moves).iter().map(|m| m.offset).collect()
}

#[test]
fn test_xiangqi_cannon_moves_on_empty_board() {
    let board = Board::new(9).unwrap();
    let moves = compile_on_board("mRcpR", 9);
    let reachable = board.reachable_moves(&moves);

    // Without a hurdle only the move-only rook half is usable.
    assert!(!reachable.is_empty());
    assert!(reachable.iter().all(|m| m.move_type == MoveType::Move));
}

#[test]
fn test_xiangqi_cannon_captures_over_one_hurdle() {
    let mut board = Board::new(9).unwrap();
    board.toggle_blocker(Offset::new(0, 2));
    let moves = compile_on_board("mRcpR", 9);
    let reachable = board.reachable_moves(&moves);

    // Beyond the hurdle: capture-hops only.
    let beyond: Vec<&&Move> = reachable
        .iter()
        .filter(|m| m.offset.x == 0 && m.offset.y > 2)
        .collect();
    assert!(!beyond.is_empty());
    assert!(beyond.iter().all(|m| m.move_type == MoveType::Capture));

    // Before the hurdle: plain moves only.
    let before: Vec<&&Move> = reachable
        .iter()
        .filter(|m| m.offset == Offset::new(0, 1))
        .collect();
    assert!(!before.is_empty());
    assert!(before.iter().all(|m| m.move_type == MoveType::Move));
}

#[test]
fn test_xiangqi_cannon_cannot_jump_two_hurdles() {
    let mut board = Board::new(9).unwrap();
    board.toggle_blocker(Offset::new(0, 1));
    board.toggle_blocker(Offset::new(0, 3));
    let moves = compile_on_board("mRcpR", 9);
    let offsets = reachable_offsets(&board, &moves);

    assert!(offsets.contains(&Offset::new(0, 2)));
    assert!(!offsets.contains(&Offset::new(0, 4)));
}

#[test]
fn test_janggi_cannon_has_no_moves_without_hurdles() {
    let board = Board::new(9).unwrap();
    let moves = compile_on_board("pR", 9);
    assert!(board.reachable_moves(&moves).is_empty());
}

#[test]
fn test_xiangqi_horse_leg_block() {
    let mut board = Board::new(9).unwrap();
    let moves = compile_on_board("nN", 9);

    board.toggle_blocker(Offset::new(0, 1));
    let offsets = reachable_offsets(&board, &moves);
    assert!(!offsets.contains(&Offset::new(1, 2)));
    assert!(!offsets.contains(&Offset::new(-1, 2)));
    assert!(offsets.contains(&Offset::new(2, 1)));
    assert_eq!(offsets.len(), 6);
}

#[test]
fn test_janggi_elephant_leg_block() {
    let mut board = Board::new(9).unwrap();
    let moves = compile_on_board("nZ", 9);
    assert_eq!(board.reachable_moves(&moves).len(), 8);

    board.toggle_blocker(Offset::new(1, 0));
    let offsets = reachable_offsets(&board, &moves);
    assert!(!offsets.contains(&Offset::new(3, 2)));
    assert!(!offsets.contains(&Offset::new(3, -2)));
    assert_eq!(offsets.len(), 6);
}

#[test]
fn test_banner_mixes_rider_and_hop_and_lame_parts() {
    let mut board = Board::new(11).unwrap();
    board.toggle_blocker(Offset::new(0, 2));
    let moves = compile_on_board("RcpRnN", 11);
    let reachable = board.reachable_moves(&moves);

    // The plain rook part stops at the blocker, the hop part captures
    // beyond it, and the lame knight part is unaffected on this file.
    assert!(reachable.iter().any(|m| m.offset == Offset::new(0, 1) && m.hop_type.is_none()));
    assert!(
        reachable
            .iter()
            .filter(|m| m.offset == Offset::new(0, 4))
            .all(|m| m.hop_type.is_some())
    );
    assert!(reachable.iter().any(|m| m.offset == Offset::new(1, 2)));
}

#[test]
fn test_grasshopper_queen_landing_squares() {
    let mut board = Board::new(11).unwrap();
    board.toggle_blocker(Offset::new(0, 3));
    let moves = compile_on_board("gQ", 11);
    let offsets = reachable_offsets(&board, &moves);

    assert_eq!(offsets, vec![Offset::new(0, 4)]);
}
