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

//! MIPS32 conventions used by the Goianinha code generator.
//!
//! This module names the registers, system call numbers and frame
//! constants the generated assembly relies on. The output targets the
//! SPIM/MARS simulators.

/// Registers used by the generated code.
pub mod registers {
    /// Accumulator: every expression leaves its value here.
    pub const ACC: &str = "$v0";
    /// Address register for loads and stores.
    pub const ADDR: &str = "$t0";
    /// Scratch register holding a saved left operand.
    pub const SCRATCH: &str = "$t1";
    /// System call argument.
    pub const ARG: &str = "$a0";
    pub const SP: &str = "$sp";
    pub const FP: &str = "$fp";
    pub const RA: &str = "$ra";
    pub const ZERO: &str = "$zero";
}

/// SPIM/MARS system call numbers (loaded into `$v0`).
pub mod syscalls {
    pub const PRINT_INT: i32 = 1;
    pub const PRINT_STRING: i32 = 4;
    pub const READ_INT: i32 = 5;
    pub const EXIT: i32 = 10;
    pub const PRINT_CHAR: i32 = 11;
}

/// Size of every stack slot in bytes.
pub const WORD_SIZE: i32 = 4;

/// Bytes the prologue saves above `$fp`: `$fp` at 0, `$ra` at 4.
pub const FRAME_HEADER_SIZE: i32 = 8;

/// Label of the static newline string.
pub const NEWLINE_LABEL: &str = "newline";

/// Label of the program entry point.
pub const ENTRY_LABEL: &str = "main";

/// Offset from `$fp` of the parameter at `position` in a function with
/// `param_count` parameters.
///
/// Arguments are pushed in declaration order, so the last one sits
/// directly above the saved registers.
pub fn parameter_offset(position: i32, param_count: usize) -> i32 {
    let count = i32::try_from(param_count).unwrap_or(i32::MAX);
    FRAME_HEADER_SIZE + WORD_SIZE * (count - 1 - position)
}

/// Offset from `$fp` of the local with the given 0-based ordinal.
pub fn local_offset(ordinal: usize) -> i32 {
    let ordinal = i32::try_from(ordinal).unwrap_or(i32::MAX / WORD_SIZE - 1);
    -WORD_SIZE * (ordinal + 1)
}
