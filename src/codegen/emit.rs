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

//! Emit helper methods for code generation.
//!
//! This module provides the low-level text emission used by every other
//! generator module: instructions, labels, directives, comments and the
//! stack push/pop sequences of the stack machine.

use super::mips::{registers, WORD_SIZE};
use super::CodeGenerator;
use std::fmt::Write;

/// Extension trait for low-level assembly emission.
///
/// Instructions and directives are indented by one tab; labels start at
/// column zero.
pub trait EmitHelpers {
    /// Emit one instruction.
    fn emit(&mut self, instruction: &str);

    /// Emit an assembler directive such as `.data`.
    fn emit_directive(&mut self, directive: &str);

    /// Emit a label definition.
    fn emit_label(&mut self, label: &str);

    /// Emit a comment, unless comments are disabled.
    fn emit_comment(&mut self, text: &str);

    /// Push a register onto the stack.
    fn emit_push(&mut self, register: &str);

    /// Pop the top of the stack into a register.
    fn emit_pop(&mut self, register: &str);

    /// Load an immediate into the accumulator.
    fn emit_load_immediate(&mut self, value: i64);

    /// Issue a system call.
    fn emit_syscall(&mut self, number: i32);

    /// Move the stack pointer by `bytes`.
    fn emit_adjust_stack(&mut self, bytes: i32);
}

impl EmitHelpers for CodeGenerator<'_> {
    fn emit(&mut self, instruction: &str) {
        let _ = writeln!(self.output, "\t{}", instruction);
    }

    fn emit_directive(&mut self, directive: &str) {
        self.emit(directive);
    }

    fn emit_label(&mut self, label: &str) {
        let _ = writeln!(self.output, "{}:", label);
    }

    fn emit_comment(&mut self, text: &str) {
        if self.options.emit_comments {
            let _ = write!(self.output, "\n\t# {}\n", text);
        }
    }

    fn emit_push(&mut self, register: &str) {
        self.emit_adjust_stack(-WORD_SIZE);
        self.emit(&format!("sw {}, 0({})", register, registers::SP));
    }

    fn emit_pop(&mut self, register: &str) {
        self.emit(&format!("lw {}, 0({})", register, registers::SP));
        self.emit_adjust_stack(WORD_SIZE);
    }

    fn emit_load_immediate(&mut self, value: i64) {
        self.emit(&format!("li {}, {}", registers::ACC, value));
    }

    fn emit_syscall(&mut self, number: i32) {
        self.emit_load_immediate(i64::from(number));
        self.emit("syscall");
    }

    fn emit_adjust_stack(&mut self, bytes: i32) {
        if bytes != 0 {
            self.emit(&format!(
                "addiu {}, {}, {}",
                registers::SP,
                registers::SP,
                bytes
            ));
        }
    }
}
