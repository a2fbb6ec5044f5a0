#![no_main]

//! Notation compiler fuzzer.
//!
//! The compiler is permissive and total: any input must produce a move
//! list, identically on every call, without panicking.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Cap digit runs to two characters to avoid OOM from huge step counts.
    let mut notation = String::with_capacity(data.len());
    let mut digits = 0;
    for c in data.chars() {
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

    let moves = betza::compile(&notation);
    assert_eq!(moves, betza::compile(&notation));

    for mv in &moves {
        // Every record carries the canonical vector of a real atom.
        assert!(mv.atom_offset.x >= mv.atom_offset.y && mv.atom_offset.y >= 0);
        assert!(mv.atom.is_ascii_uppercase());
    }
});
