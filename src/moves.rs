//! Move record types - the output contract of the notation compiler.
//!
//! A compiled notation string becomes an ordered sequence of [`Move`]
//! values. Consumers (board rendering, front ends) read these fields and
//! nothing else; the compiler internals stay private to [`crate::notation`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbolic square offset relative to the piece's own square.
///
/// Positive `y` is forward (toward the opponent), positive `x` is to the
/// piece's right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Offset {
    /// File displacement (columns).
    pub x: i32,
    /// Rank displacement (rows).
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Whether a move may relocate, capture, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    /// May move to an empty square or capture an enemy piece (the default).
    MoveCapture,
    /// May only move to an empty square (modifier `m`).
    Move,
    /// May only capture an enemy piece (modifier `c`).
    Capture,
}

/// Hopper semantics: the move needs exactly one occupied square on its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopType {
    /// Cannon-style hop (modifier `p`): lands anywhere beyond the hurdle.
    Cannon,
    /// Grasshopper-style hop (modifier `g`): lands immediately beyond it.
    Grasshopper,
}

/// How the move interacts with occupied squares along its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JumpType {
    /// No blocker interaction. Never produced by the compiler, but part of
    /// the wire contract for externally-constructed move sets.
    Normal,
    /// Ignores intervening pieces (leapers by default, `{N,C,Z}` riders).
    Jumping,
    /// Blocked by intervening pieces (sliding riders, lame leapers via `n`).
    NonJumping,
}

/// One fully-resolved move offset with its movement semantics.
///
/// Value object: two moves are the same move iff all fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The square displacement of this move.
    pub offset: Offset,
    /// Move/capture restriction.
    pub move_type: MoveType,
    /// Hopper semantics, if any.
    pub hop_type: Option<HopType>,
    /// Blocker interaction along the path.
    pub jump_type: JumpType,
    /// The primitive atom symbol this move was derived from.
    pub atom: char,
    /// The atom's canonical primitive vector (`x >= y >= 0`).
    ///
    /// Consumers need this to reconstruct the unit step direction of rider
    /// and hopper moves for path tracing.
    pub atom_offset: Offset,
    /// Legal only as the piece's first move (modifier `i`).
    pub initial_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_ordering_is_deterministic() {
        let mut offsets = vec![Offset::new(1, -1), Offset::new(-1, 1), Offset::new(0, 0)];
        offsets.sort();
        assert_eq!(
            offsets,
            vec![Offset::new(-1, 1), Offset::new(0, 0), Offset::new(1, -1)]
        );
    }

    #[test]
    fn test_move_json_round_trip() {
        let mv = Move {
            offset: Offset::new(2, 1),
            move_type: MoveType::Capture,
            hop_type: Some(HopType::Cannon),
            jump_type: JumpType::Jumping,
            atom: 'N',
            atom_offset: Offset::new(2, 1),
            initial_only: false,
        };
        let json = serde_json::to_string(&mv).unwrap();
        assert!(json.contains("\"capture\""));
        assert!(json.contains("\"jumping\""));
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }

    #[test]
    fn test_jump_type_wire_names() {
        let json = serde_json::to_string(&JumpType::NonJumping).unwrap();
        assert_eq!(json, "\"non-jumping\"");
    }
}
