// Goianinha - A compiler for a small imperative teaching language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Fuzz target for the complete Goianinha compiler pipeline.
//!
//! This fuzzer builds grammatical programs from the fuzz input and feeds
//! them through the entire compilation pipeline. Programs that analyze
//! cleanly must produce assembly with a `main` block and well formed
//! string directives.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_compiler
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_compiler -- -max_total_time=60

#![no_main]

mod program;

use libfuzzer_sys::fuzz_target;
use program::Program;

/// An `.asciiz` operand ends in a quote that no backslash escapes.
fn closes_string(line: &str) -> bool {
    let Some(body) = line.strip_suffix('"') else {
        return false;
    };
    body.chars().rev().take_while(|c| *c == '\\').count() % 2 == 0
}

fuzz_target!(|program: Program| {
    let source = program.render();

    if let Ok(assembly) = goianinha::compile(&source) {
        assert!(assembly.contains("\nmain:\n"), "no main block:\n{}", source);
        for line in assembly.lines().map(str::trim) {
            if line.starts_with(".asciiz") {
                assert!(closes_string(line), "unterminated {}\n{}", line, source);
            }
        }
    }
});
