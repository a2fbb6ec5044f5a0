//! Geometry tables for the Betza base atoms and compound aliases.

use crate::moves::Offset;
use crate::notation::token::Suffix;

/// The primitive leaper atoms and their canonical vectors (`x >= y >= 0`).
const ATOMS: [(char, Offset); 9] = [
    ('W', Offset::new(1, 0)),
    ('F', Offset::new(1, 1)),
    ('D', Offset::new(2, 0)),
    ('N', Offset::new(2, 1)),
    ('A', Offset::new(2, 2)),
    ('H', Offset::new(3, 0)),
    ('C', Offset::new(3, 1)),
    ('Z', Offset::new(3, 2)),
    ('G', Offset::new(3, 3)),
];

/// Compound aliases and their expansions.
///
/// Each component is an atom (or further alias) letter with a placeholder
/// suffix: `Suffix::Rider` for unlimited travel, `Suffix::Count` for a fixed
/// leap count, `Suffix::Implicit` to let the component keep its own default.
const ALIASES: [(char, &[(char, Suffix)]); 7] = [
    ('B', &[('F', Suffix::Rider)]),
    ('R', &[('W', Suffix::Rider)]),
    ('Q', &[('W', Suffix::Rider), ('F', Suffix::Rider)]),
    ('K', &[('W', Suffix::Count(1)), ('F', Suffix::Count(1))]),
    ('E', &[('R', Suffix::Implicit), ('N', Suffix::Implicit)]),
    ('J', &[('A', Suffix::Implicit), ('D', Suffix::Implicit)]),
    ('M', &[('F', Suffix::Implicit), ('C', Suffix::Implicit)]),
];

/// Look up the canonical vector of a primitive atom.
#[must_use]
pub(crate) fn atom_vector(symbol: char) -> Option<Offset> {
    ATOMS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, offset)| *offset)
}

/// Look up the expansion of a compound alias.
#[must_use]
pub(crate) fn alias_expansion(symbol: char) -> Option<&'static [(char, Suffix)]> {
    ALIASES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, expansion)| *expansion)
}

/// Whether riders of this atom jump over intervening pieces.
///
/// Oblique (knight-family) riders are jumping; orthogonal and diagonal
/// riders slide and need a clear line.
#[must_use]
pub(crate) const fn is_oblique_rider(symbol: char) -> bool {
    matches!(symbol, 'N' | 'C' | 'Z')
}
