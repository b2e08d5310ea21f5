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

//! Relational operator code generation.
//!
//! Comparisons use the MIPS set pseudo-instructions, which yield 1 or 0.
//! The saved left operand is in `$t1` and the right one in `$v0`.

use super::emit::EmitHelpers;
use super::mips::registers;
use super::CodeGenerator;
use crate::ast::BinaryOp;

/// Set instruction implementing a relational operator.
pub fn comparison_mnemonic(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Equal => Some("seq"),
        BinaryOp::NotEqual => Some("sne"),
        BinaryOp::Less => Some("slt"),
        BinaryOp::Greater => Some("sgt"),
        BinaryOp::LessEqual => Some("sle"),
        BinaryOp::GreaterEqual => Some("sge"),
        _ => None,
    }
}

/// Extension trait for comparison code generation.
pub trait ComparisonHelpers {
    /// Combine `$t1` and `$v0` with a set instruction into `$v0`.
    fn emit_comparison(&mut self, mnemonic: &str);

    /// Turn `register` into 1 if it is non-zero, 0 otherwise.
    fn emit_normalize(&mut self, register: &str);
}

impl ComparisonHelpers for CodeGenerator<'_> {
    fn emit_comparison(&mut self, mnemonic: &str) {
        self.emit(&format!(
            "{} {}, {}, {}",
            mnemonic,
            registers::ACC,
            registers::SCRATCH,
            registers::ACC
        ));
    }

    fn emit_normalize(&mut self, register: &str) {
        self.emit(&format!("sne {}, {}, {}", register, register, registers::ZERO));
    }
}
