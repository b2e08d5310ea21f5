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

//! Fuzz target for the Goianinha parser.
//!
//! This fuzzer builds programs that follow the grammar from the fuzz input,
//! so every one of them must tokenize and parse. It finds crashes, panics,
//! infinite loops and grammar cases the parser rejects wrongly.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_parser
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_parser -- -max_total_time=60

#![no_main]

mod program;

use libfuzzer_sys::fuzz_target;
use program::Program;

fuzz_target!(|program: Program| {
    let source = program.render();

    let tokens = match goianinha::lexer::tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => panic!("lexer rejected {:?}:\n{}", error, source),
    };
    if let Err(error) = goianinha::parser::parse(&tokens) {
        panic!("parser rejected {:?}:\n{}", error, source);
    }
});
