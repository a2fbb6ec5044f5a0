//! The compilation driver: worklist consumption, alias expansion, and move
//! materialization.

use crate::moves::{JumpType, Move, Offset};
use crate::notation::modifier::ModifierRun;
use crate::notation::token::{AtomToken, Suffix, Token, tokenize};
use crate::notation::{INFINITY_CAP, atoms};
use std::collections::VecDeque;

/// Compile a notation string into its move sequence.
///
/// `board_size` bounds rider travel to half the board edge; `None` (or a
/// zero size upstream) uses [`INFINITY_CAP`]. All state lives in this call;
/// the function is pure and re-entrant.
pub(crate) fn run(notation: &str, board_size: Option<u16>) -> Vec<Move> {
    let rider_cap = board_size.map_or(INFINITY_CAP, |size| u32::from(size) / 2);

    let mut queue = tokenize(notation);
    let mut pending = ModifierRun::default();
    let mut moves = Vec::new();

    while let Some(token) = queue.pop_front() {
        match token {
            Token::Modifiers(mods) => pending = mods,
            Token::Atom(atom) => {
                if collapse_rider_shorthand(&mut queue, atom) {
                    continue;
                }
                if let Some(expansion) = atoms::alias_expansion(atom.letter) {
                    expand_alias(&mut queue, atom, expansion, &pending);
                    pending = ModifierRun::default();
                    continue;
                }
                let Some(atom_offset) = atoms::atom_vector(atom.letter) else {
                    // Unknown letter: skipped, the pending run stays armed
                    // for the next atom.
                    continue;
                };
                let mods = std::mem::take(&mut pending);
                materialize(&mut moves, atom, atom_offset, &mods, rider_cap);
            }
        }
    }

    moves
}

/// Collapse `XX` (two consecutive bare atoms of the same letter) into a
/// single rider token. Checked before alias lookup, so `BB` becomes a
/// bishop rider the same way `NN` becomes a nightrider.
fn collapse_rider_shorthand(queue: &mut VecDeque<Token>, atom: AtomToken) -> bool {
    if atom.suffix != Suffix::Implicit {
        return false;
    }
    let doubled = matches!(
        queue.front(),
        Some(Token::Atom(next)) if next.letter == atom.letter && next.suffix == Suffix::Implicit
    );
    if doubled {
        queue.pop_front();
        queue.push_front(Token::Atom(AtomToken {
            letter: atom.letter,
            suffix: Suffix::Rider,
        }));
    }
    doubled
}

/// Re-queue an alias's component atoms at the front of the worklist.
///
/// A suffix on the alias token overwrites every component placeholder, and
/// the pending modifier run is re-injected before each component so the run
/// scopes over the whole compound (not just its first atom).
fn expand_alias(
    queue: &mut VecDeque<Token>,
    alias: AtomToken,
    expansion: &[(char, Suffix)],
    pending: &ModifierRun,
) {
    for &(letter, placeholder) in expansion.iter().rev() {
        let suffix = match alias.suffix {
            Suffix::Implicit => placeholder,
            forced => forced,
        };
        queue.push_front(Token::Atom(AtomToken { letter, suffix }));
        if !pending.is_empty() {
            queue.push_front(Token::Modifiers(pending.clone()));
        }
    }
}

/// Emit the move records for one resolved primitive atom.
fn materialize(
    moves: &mut Vec<Move>,
    atom: AtomToken,
    atom_offset: Offset,
    mods: &ModifierRun,
    rider_cap: u32,
) {
    let max_steps = match atom.suffix {
        Suffix::Implicit => 1,
        Suffix::Rider => rider_cap,
        Suffix::Count(n) => n,
    };
    let jump_type = match atom.suffix {
        Suffix::Rider => {
            if atoms::is_oblique_rider(atom.letter) {
                JumpType::Jumping
            } else {
                JumpType::NonJumping
            }
        }
        Suffix::Implicit | Suffix::Count(_) => {
            if mods.is_lame() {
                JumpType::NonJumping
            } else {
                JumpType::Jumping
            }
        }
    };
    let move_type = mods.move_type();
    let hop_type = mods.hop_type();
    let initial_only = mods.is_initial();

    let directions = super::direction::generate(atom_offset);
    let allowed = super::direction::filter(&directions, mods.modifiers(), atom_offset);

    for step in 1..=max_steps {
        let step = i32::try_from(step).unwrap_or(i32::MAX);
        for dir in &allowed {
            moves.push(Move {
                offset: Offset::new(dir.x.saturating_mul(step), dir.y.saturating_mul(step)),
                move_type,
                hop_type,
                jump_type,
                atom: atom.letter,
                atom_offset,
                initial_only,
            });
        }
    }
}
