// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Betza: a compiler for Betza fairy-chess movement notation.
//!
//! This crate turns notation strings like `mRcN` (a piece that moves as a
//! rook and captures as a knight) into fully enumerated move offsets, each
//! tagged with its movement semantics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Catalog (named pieces, variants)  │
//! ├─────────────────────────────────────┤
//! │   Notation Compiler                 │
//! ├─────────────────────────────────────┤
//! │   Board (blockers, reachability)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! The compiler is pure: identical inputs always produce identical output
//! sequences, and no state survives a compilation call. The catalog feeds
//! it notation strings; the board consumes its [`moves::Move`] records.

pub mod board;
pub mod catalog;
pub mod moves;
pub mod notation;

pub use board::Board;
pub use moves::{HopType, JumpType, Move, MoveType, Offset};
pub use notation::{INFINITY_CAP, compile, compile_on_board};
