//! Integration tests for variants.ini catalog loading.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use betza::catalog::{builtin_movement, load_variants, parse_variants};
use betza::{MoveType, compile};
use std::io::Write;

const SAMPLE: &str = "\
; Sample variants file
[shako]
pawn = p
cannon = c
customPiece1 = e:nA

[shako-mini:shako]
cannon = -
customPiece1 = e:F
";

#[test]
fn test_load_variants_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let pieces = load_variants(file.path()).unwrap();
    let shako: Vec<_> = pieces.iter().filter(|p| p.variant == "shako").collect();
    assert_eq!(shako.len(), 3);
    assert!(shako.iter().any(|p| p.name == "Cannon" && p.betza == "mRcpR"));
    assert!(shako.iter().any(|p| p.name == "Custom Piece 1" && p.betza == "nA"));
}

#[test]
fn test_inherited_variant_overrides_and_removes() {
    let pieces = parse_variants(SAMPLE).unwrap();
    let mini: Vec<_> = pieces.iter().filter(|p| p.variant == "shako-mini").collect();
    assert_eq!(mini.len(), 2);
    assert!(!mini.iter().any(|p| p.name == "Cannon"));
    assert!(mini.iter().any(|p| p.name == "Custom Piece 1" && p.betza == "F"));
    assert!(mini.iter().any(|p| p.name == "Pawn"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_variants(&dir.path().join("absent.ini")).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn test_catalog_notation_compiles() {
    // Every built-in piece's notation flows straight into the compiler.
    let cannon = builtin_movement("cannon").unwrap();
    let moves = compile(cannon);
    assert!(!moves.is_empty());
    assert!(moves.iter().any(|m| m.move_type == MoveType::Move));
    assert!(moves.iter().any(|m| m.move_type == MoveType::Capture));
}
