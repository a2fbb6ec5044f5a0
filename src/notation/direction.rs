//! Direction generation and the directional-constraint algebra.
//!
//! The filter is a small recursive function over the tagged modifier run.
//! Union branches (`v`, `s`, multiple doubled letters, `fb` on the knight
//! atom) recurse with rewritten runs and merge the results; the base case
//! evaluates the axis constraints against each candidate direction.

use crate::moves::Offset;
use crate::notation::modifier::Modifier;
use std::collections::BTreeSet;

/// Generate the full symmetric direction set of a primitive vector:
/// every sign-flip of `(x, y)` and of its axis-swap `(y, x)`, de-duplicated.
///
/// Yields 4 directions for orthogonal and diagonal atoms, 8 for hippogonal
/// ones.
pub(crate) fn generate(atom: Offset) -> BTreeSet<Offset> {
    let mut dirs = BTreeSet::new();
    for sx in [-1, 1] {
        for sy in [-1, 1] {
            dirs.insert(Offset::new(atom.x * sx, atom.y * sy));
            dirs.insert(Offset::new(atom.y * sx, atom.x * sy));
        }
    }
    dirs
}

/// A doubled directional letter found in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DoubledToken {
    Ff,
    Bb,
    Ll,
    Rr,
}

impl DoubledToken {
    /// The single letter this token doubles.
    const fn letter(self) -> Modifier {
        match self {
            Self::Ff => Modifier::Forward,
            Self::Bb => Modifier::Back,
            Self::Ll => Modifier::Left,
            Self::Rr => Modifier::Right,
        }
    }

    /// Whether this token constrains to the vertical-steep subset.
    const fn is_vertical(self) -> bool {
        matches!(self, Self::Ff | Self::Bb)
    }
}

/// Restrict a direction set by the accumulated modifier run.
pub(crate) fn filter(dirs: &BTreeSet<Offset>, mods: &[Modifier], atom: Offset) -> BTreeSet<Offset> {
    // Union shorthands: v = f|b, s = l|r. Each branch re-runs the filter
    // with the shorthand replaced by one concrete letter.
    if let Some(pos) = mods.iter().position(|m| *m == Modifier::Vertical) {
        return branch_union(dirs, mods, pos, atom, Modifier::Forward, Modifier::Back);
    }
    if let Some(pos) = mods.iter().position(|m| *m == Modifier::Sideways) {
        return branch_union(dirs, mods, pos, atom, Modifier::Left, Modifier::Right);
    }

    // Two or more distinct doubled letters combine as a union of the
    // individual steepness restrictions.
    let doubled = doubled_tokens(mods);
    if doubled.len() > 1 {
        let mut merged = BTreeSet::new();
        for token in doubled {
            merged.extend(filter(dirs, &[token.letter(), token.letter()], atom));
        }
        return merged;
    }

    base_filter(dirs, mods, atom, doubled.first().copied())
}

/// Replace the shorthand at `pos` with each of `first`/`second` in turn and
/// return the union of the two filtered sets.
fn branch_union(
    dirs: &BTreeSet<Offset>,
    mods: &[Modifier],
    pos: usize,
    atom: Offset,
    first: Modifier,
    second: Modifier,
) -> BTreeSet<Offset> {
    let mut rest: Vec<Modifier> = mods.to_vec();
    rest.remove(pos);

    let mut with_first = Vec::with_capacity(rest.len() + 1);
    with_first.push(first);
    with_first.extend_from_slice(&rest);

    let mut with_second = Vec::with_capacity(rest.len() + 1);
    with_second.push(second);
    with_second.extend_from_slice(&rest);

    let mut merged = filter(dirs, &with_first, atom);
    merged.extend(filter(dirs, &with_second, atom));
    merged
}

/// Collect the distinct doubled letters, in order of first appearance.
/// Doubling means adjacency; any other character in between breaks it.
fn doubled_tokens(mods: &[Modifier]) -> Vec<DoubledToken> {
    let mut found = Vec::new();
    for pair in mods.windows(2) {
        let token = match (pair[0], pair[1]) {
            (Modifier::Forward, Modifier::Forward) => DoubledToken::Ff,
            (Modifier::Back, Modifier::Back) => DoubledToken::Bb,
            (Modifier::Left, Modifier::Left) => DoubledToken::Ll,
            (Modifier::Right, Modifier::Right) => DoubledToken::Rr,
            _ => continue,
        };
        if !found.contains(&token) {
            found.push(token);
        }
    }
    found
}

/// The non-recursive case: a single axis/steepness context.
fn base_filter(
    dirs: &BTreeSet<Offset>,
    mods: &[Modifier],
    atom: Offset,
    doubled: Option<DoubledToken>,
) -> BTreeSet<Offset> {
    let is_orthogonal = atom.x * atom.y == 0;
    let is_hippogonal = atom.x != atom.y && atom.x != 0 && atom.y != 0;

    // `fb` on the knight atom means the union of the two steep subsets,
    // not their (empty) intersection.
    let residual: Vec<Modifier> = mods
        .iter()
        .copied()
        .filter(|m| *m != Modifier::Half)
        .collect();
    if residual == [Modifier::Forward, Modifier::Back] && atom == Offset::new(2, 1) {
        let mut merged = filter(dirs, &[Modifier::Forward], atom);
        merged.extend(filter(dirs, &[Modifier::Back], atom));
        return merged;
    }

    let dir_letters: Vec<Modifier> = mods
        .iter()
        .copied()
        .filter(|m| {
            matches!(
                m,
                Modifier::Forward | Modifier::Back | Modifier::Left | Modifier::Right
            )
        })
        .collect();
    if dir_letters.is_empty() {
        return dirs.clone();
    }

    // A lone axis qualifier on an oblique leaper is ambiguous as a plain
    // half-plane restriction; it implies the steep-axis subset instead.
    let promoted = is_hippogonal && dir_letters.len() == 1;
    let suppress_steepness = mods.contains(&Modifier::Half);

    let has_f = dir_letters.contains(&Modifier::Forward);
    let has_b = dir_letters.contains(&Modifier::Back);
    let has_l = dir_letters.contains(&Modifier::Left);
    let has_r = dir_letters.contains(&Modifier::Right);
    let has_v_mod = has_f || has_b;
    let has_h_mod = has_l || has_r;

    let mut filtered = BTreeSet::new();
    for &d in dirs {
        let v_valid = !has_v_mod || (has_f && d.y > 0) || (has_b && d.y < 0);
        let h_valid = !has_h_mod || (has_l && d.x < 0) || (has_r && d.x > 0);
        // An orthogonal piece constrained on both axes keeps the union
        // ("front or side"); everything else intersects.
        let keep = if is_orthogonal && has_v_mod && has_h_mod {
            v_valid || h_valid
        } else {
            v_valid && h_valid
        };
        if keep {
            filtered.insert(d);
        }
    }

    let steep_vertical =
        doubled.is_some_and(DoubledToken::is_vertical) || (promoted && has_v_mod);
    let steep_horizontal =
        doubled.is_some_and(|t| !t.is_vertical()) || (promoted && has_h_mod);
    if suppress_steepness || (!steep_vertical && !steep_horizontal) {
        return filtered;
    }

    filtered
        .into_iter()
        .filter(|d| {
            (!steep_vertical || d.y.abs() > d.x.abs())
                && (!steep_horizontal || d.x.abs() > d.y.abs())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::modifier::ModifierRun;

    const KNIGHT: Offset = Offset::new(2, 1);
    const WAZIR: Offset = Offset::new(1, 0);
    const FERZ: Offset = Offset::new(1, 1);
    const CAMEL: Offset = Offset::new(3, 1);

    fn dirs_of(atom: Offset) -> BTreeSet<Offset> {
        generate(atom)
    }

    fn run(mods: &str, atom: Offset) -> BTreeSet<Offset> {
        let parsed = ModifierRun::from_chars(mods);
        filter(&dirs_of(atom), parsed.modifiers(), atom)
    }

    fn set(offsets: &[(i32, i32)]) -> BTreeSet<Offset> {
        offsets.iter().map(|&(x, y)| Offset::new(x, y)).collect()
    }

    #[test]
    fn test_generate_counts() {
        assert_eq!(dirs_of(WAZIR).len(), 4);
        assert_eq!(dirs_of(FERZ).len(), 4);
        assert_eq!(dirs_of(KNIGHT).len(), 8);
        assert_eq!(dirs_of(Offset::new(3, 2)).len(), 8);
        assert_eq!(dirs_of(Offset::new(3, 3)).len(), 4);
    }

    #[test]
    fn test_no_modifiers_keeps_everything() {
        assert_eq!(run("", KNIGHT), dirs_of(KNIGHT));
        assert_eq!(run("mc", KNIGHT), dirs_of(KNIGHT));
    }

    #[test]
    fn test_lone_forward_on_knight_promotes_to_steep() {
        assert_eq!(run("f", KNIGHT), set(&[(-1, 2), (1, 2)]));
    }

    #[test]
    fn test_half_cancels_promotion_steepness() {
        assert_eq!(run("fh", KNIGHT), set(&[(-1, 2), (1, 2), (-2, 1), (2, 1)]));
    }

    #[test]
    fn test_quadrant_intersection_on_knight() {
        assert_eq!(run("fl", KNIGHT), set(&[(-1, 2), (-2, 1)]));
    }

    #[test]
    fn test_doubled_plus_quadrant() {
        assert_eq!(run("ffl", KNIGHT), set(&[(-1, 2)]));
    }

    #[test]
    fn test_doubled_union() {
        assert_eq!(run("ffrr", KNIGHT), set(&[(-1, 2), (1, 2), (2, 1), (2, -1)]));
    }

    #[test]
    fn test_vertical_shorthand_on_knight() {
        assert_eq!(run("v", KNIGHT), set(&[(-1, 2), (1, 2), (-1, -2), (1, -2)]));
    }

    #[test]
    fn test_sideways_shorthand_on_knight() {
        assert_eq!(run("s", KNIGHT), set(&[(-2, 1), (2, 1), (-2, -1), (2, -1)]));
    }

    #[test]
    fn test_sideways_doubled_camel() {
        assert_eq!(run("srr", CAMEL), set(&[(3, 1), (3, -1), (-3, 1), (-3, -1)]));
    }

    #[test]
    fn test_fb_knight_special_union() {
        assert_eq!(run("fb", KNIGHT), set(&[(-1, 2), (1, 2), (-1, -2), (1, -2)]));
    }

    #[test]
    fn test_fb_on_ferz_is_not_special() {
        // On a non-knight atom, f+b together allow every direction with a
        // vertical component.
        assert_eq!(run("fb", FERZ), dirs_of(FERZ));
    }

    #[test]
    fn test_orthogonal_both_axes_is_a_union() {
        assert_eq!(run("sf", WAZIR), set(&[(0, 1), (-1, 0), (1, 0)]));
        assert_eq!(run("frl", WAZIR), set(&[(0, 1), (-1, 0), (1, 0)]));
    }

    #[test]
    fn test_oblique_both_axes_intersects() {
        assert_eq!(run("rlb", FERZ), set(&[(1, -1), (-1, -1)]));
    }

    #[test]
    fn test_forward_on_orthogonal_does_not_promote() {
        assert_eq!(run("f", WAZIR), set(&[(0, 1)]));
    }
}
