//! Piece catalog: built-in piece definitions and `variants.ini` parsing.
//!
//! This is the configuration side of the system: it produces named notation
//! strings that are fed verbatim to [`crate::notation::compile`]. The file
//! format is Fairy-Stockfish's `variants.ini`: `[variant]` or
//! `[variant:parent]` sections whose settings inherit through the parent
//! chain, with piece keys mapping to either a predefined movement or a
//! `letter:betza` custom definition.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// The predefined piece movements, by Fairy-Stockfish key.
const BUILT_IN: [(&str, &str); 37] = [
    ("pawn", "fmWfceF"),
    ("knight", "N"),
    ("bishop", "B"),
    ("rook", "R"),
    ("queen", "Q"),
    ("fers", "F"),
    ("alfil", "A"),
    ("fersAlfil", "FA"),
    ("silver", "FfW"),
    ("aiwok", "RNF"),
    ("bers", "RF"),
    ("archbishop", "BN"),
    ("chancellor", "RN"),
    ("amazon", "QN"),
    ("knibis", "mNcB"),
    ("biskni", "mBcN"),
    ("kniroo", "mNcR"),
    ("rookni", "mRcN"),
    ("shogiPawn", "fW"),
    ("lance", "fR"),
    ("shogiKnight", "fN"),
    ("gold", "WfF"),
    ("dragonHorse", "BW"),
    ("clobber", "cW"),
    ("breakthrough", "fmWfF"),
    ("immobile", ""),
    ("cannon", "mRcpR"),
    ("janggiCannon", "pR"),
    ("soldier", "fsW"),
    ("horse", "nN"),
    ("elephant", "nA"),
    ("janggiElephant", "nZ"),
    ("banner", "RcpRnN"),
    ("wazir", "W"),
    ("commoner", "K"),
    ("centaur", "KN"),
    ("king", "K"),
];

/// How deep a `[child:parent]` chain may nest before resolution gives up.
/// Bounds malformed files with inheritance cycles.
const MAX_INHERITANCE_DEPTH: usize = 8;

/// A named piece with its movement notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Piece {
    /// Display name ("Pawn", "Custom Piece 3", ...).
    pub name: String,
    /// The variant the piece belongs to.
    pub variant: String,
    /// The movement notation, ready for the compiler.
    pub betza: String,
}

/// Catalog loading/parsing errors.
#[derive(Debug)]
pub enum CatalogError {
    /// The variants file could not be read.
    Io(std::io::Error),
    /// A `[section` header was never closed.
    UnterminatedSection {
        /// 1-based line number of the offending header.
        line: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "failed to read variants file: {e}"),
            CatalogError::UnterminatedSection { line } => {
                write!(f, "unterminated section header at line {line}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::UnterminatedSection { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

/// Look up the predefined movement for a piece key.
#[must_use]
pub fn builtin_movement(key: &str) -> Option<&'static str> {
    BUILT_IN.iter().find(|(k, _)| *k == key).map(|(_, b)| *b)
}

/// The built-in pieces as a catalog (immobile pieces excluded).
#[must_use]
pub fn builtin_pieces() -> Vec<Piece> {
    BUILT_IN
        .iter()
        .filter(|(_, betza)| !betza.is_empty())
        .map(|(key, betza)| Piece {
            name: display_name(key),
            variant: "built-in".to_string(),
            betza: (*betza).to_string(),
        })
        .collect()
}

/// Load and parse a `variants.ini` file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read, or any error
/// of [`parse_variants`].
pub fn load_variants(path: &Path) -> Result<Vec<Piece>, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_variants(&content)
}

/// Parse `variants.ini` content into its piece catalog.
///
/// Unknown keys, valueless lines, and content before the first section are
/// skipped (the same permissive policy the notation compiler uses).
///
/// # Errors
///
/// Returns [`CatalogError::UnterminatedSection`] for a `[` header with no
/// closing bracket.
pub fn parse_variants(content: &str) -> Result<Vec<Piece>, CatalogError> {
    let sections = split_sections(content)?;
    let mut pieces = Vec::new();
    let mut processed = Vec::new();

    for section in &sections {
        let variant = section.variant();
        if processed.contains(&variant) {
            continue;
        }
        processed.push(variant);

        let mut variant_pieces: Vec<Piece> = Vec::new();
        for (key, value) in resolve_settings(&sections, section, 0) {
            if !is_piece_key(key) {
                continue;
            }
            let name = display_name(key);
            if value.trim() == "-" {
                // Removal of an inherited piece.
                variant_pieces.retain(|p| p.name != name);
                continue;
            }
            let betza = match value.split_once(':') {
                Some((_, custom)) => custom.trim().to_string(),
                None => builtin_movement(key).unwrap_or_default().to_string(),
            };
            if betza.is_empty() {
                continue;
            }
            if let Some(existing) = variant_pieces.iter_mut().find(|p| p.name == name) {
                existing.betza = betza;
            } else {
                variant_pieces.push(Piece {
                    name,
                    variant: section.variant().to_string(),
                    betza,
                });
            }
        }
        pieces.extend(variant_pieces);
    }

    Ok(pieces)
}

/// One `[header]` section and its `key = value` lines, in file order.
#[derive(Debug)]
struct Section {
    header: String,
    entries: Vec<(String, String)>,
}

impl Section {
    /// The variant name: the header up to any `:parent` suffix.
    fn variant(&self) -> &str {
        self.header.split(':').next().unwrap_or(&self.header)
    }
}

fn split_sections(content: &str) -> Result<Vec<Section>, CatalogError> {
    let mut sections: Vec<Section> = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix('[') {
            let Some(header) = rest.strip_suffix(']') else {
                return Err(CatalogError::UnterminatedSection { line: idx + 1 });
            };
            sections.push(Section {
                header: header.trim().to_string(),
                entries: Vec::new(),
            });
        } else if let Some((key, value)) = line.split_once('=')
            && let Some(section) = sections.last_mut()
        {
            section
                .entries
                .push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    Ok(sections)
}

/// All settings of a section, parent chain first, later keys overriding.
fn resolve_settings<'a>(
    sections: &'a [Section],
    section: &'a Section,
    depth: usize,
) -> Vec<(&'a str, &'a str)> {
    let mut settings = Vec::new();

    if depth < MAX_INHERITANCE_DEPTH
        && let Some((_, parent)) = section.header.split_once(':')
        && let Some(parent_section) = sections.iter().find(|s| s.variant() == parent.trim())
    {
        settings = resolve_settings(sections, parent_section, depth + 1);
    }

    for (key, value) in &section.entries {
        if let Some(existing) = settings.iter_mut().find(|(k, _)| *k == key.as_str()) {
            existing.1 = value.as_str();
        } else {
            settings.push((key.as_str(), value.as_str()));
        }
    }

    settings
}

fn is_piece_key(key: &str) -> bool {
    builtin_movement(key).is_some() || custom_piece_index(key).is_some()
}

/// `customPiece1` through `customPiece25`.
fn custom_piece_index(key: &str) -> Option<u8> {
    let index: u8 = key.strip_prefix("customPiece")?.parse().ok()?;
    (1..=25).contains(&index).then_some(index)
}

fn display_name(key: &str) -> String {
    if let Some(index) = custom_piece_index(key) {
        return format!("Custom Piece {index}");
    }
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_movements() {
        assert_eq!(builtin_movement("cannon"), Some("mRcpR"));
        assert_eq!(builtin_movement("horse"), Some("nN"));
        assert_eq!(builtin_movement("missing"), None);
    }

    #[test]
    fn test_builtin_pieces_skip_immobile() {
        let pieces = builtin_pieces();
        assert!(pieces.iter().all(|p| !p.betza.is_empty()));
        assert!(pieces.iter().any(|p| p.name == "Cannon"));
        assert!(!pieces.iter().any(|p| p.name == "Immobile"));
    }

    #[test]
    fn test_parse_predefined_and_custom_pieces() {
        let pieces = parse_variants(
            "[mini]\n\
             knight = n\n\
             customPiece1 = a:mRcpR\n",
        )
        .unwrap();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].name, "Knight");
        assert_eq!(pieces[0].betza, "N");
        assert_eq!(pieces[1].name, "Custom Piece 1");
        assert_eq!(pieces[1].betza, "mRcpR");
    }

    #[test]
    fn test_variant_inheritance_and_override() {
        let pieces = parse_variants(
            "[base]\n\
             rook = r\n\
             knight = n\n\
             [child:base]\n\
             knight = h:nN\n",
        )
        .unwrap();
        let child: Vec<&Piece> = pieces.iter().filter(|p| p.variant == "child").collect();
        assert_eq!(child.len(), 2);
        assert!(child.iter().any(|p| p.name == "Rook" && p.betza == "R"));
        assert!(child.iter().any(|p| p.name == "Knight" && p.betza == "nN"));
    }

    #[test]
    fn test_piece_removal() {
        let pieces = parse_variants(
            "[base]\n\
             queen = q\n\
             [child:base]\n\
             queen = -\n",
        )
        .unwrap();
        let child: Vec<&Piece> = pieces.iter().filter(|p| p.variant == "child").collect();
        assert!(child.is_empty());
    }

    #[test]
    fn test_unknown_keys_and_comments_are_skipped() {
        let pieces = parse_variants(
            "; variants file\n\
             [v]\n\
             maxRank = 10\n\
             # comment\n\
             pawn = p\n",
        )
        .unwrap();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].name, "Pawn");
    }

    #[test]
    fn test_unterminated_section_is_an_error() {
        let err = parse_variants("[broken\npawn = p\n").unwrap_err();
        assert!(matches!(err, CatalogError::UnterminatedSection { line: 1 }));
    }

    #[test]
    fn test_inheritance_cycle_terminates() {
        let pieces = parse_variants(
            "[a:b]\n\
             pawn = p\n\
             [b:a]\n\
             knight = n\n",
        )
        .unwrap();
        assert!(!pieces.is_empty());
    }
}
