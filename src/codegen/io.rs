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

//! Input and output code generation.
//!
//! `leia` reads an integer, `escreva` prints a string constant, an integer
//! or a character, and `novalinha` prints the static newline string.

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::labels::LabelManager;
use super::mips::{registers, syscalls, NEWLINE_LABEL};
use super::variables::VariableManager;
use super::CodeGenerator;
use crate::ast::{DataType, Expr, ExprKind, Identifier};
use crate::error::{CompileError, Span};

/// Extension trait for I/O code generation.
pub trait IoEmitter {
    /// Generate `leia target;`.
    fn generate_read(&mut self, target: &Identifier, span: Span) -> Result<(), CompileError>;

    /// Generate `escreva operand;`.
    fn generate_write(&mut self, operand: &Expr) -> Result<(), CompileError>;

    /// Generate `novalinha;`.
    fn generate_newline(&mut self);
}

impl IoEmitter for CodeGenerator<'_> {
    fn generate_read(&mut self, target: &Identifier, span: Span) -> Result<(), CompileError> {
        self.emit_syscall(syscalls::READ_INT);
        self.emit_variable_address(target, span)?;
        self.emit(&format!("sw {}, 0({})", registers::ACC, registers::ADDR));
        Ok(())
    }

    fn generate_write(&mut self, operand: &Expr) -> Result<(), CompileError> {
        if let ExprKind::StringLiteral(text) = &operand.kind {
            let label = self.next_string_label();
            self.emit_directive(".data");
            self.emit_label(&label);
            self.emit_directive(&format!(".asciiz \"{}\"", escape_asciiz(text)));
            self.emit_directive(".text");
            self.emit(&format!("la {}, {}", registers::ARG, label));
            self.emit_syscall(syscalls::PRINT_STRING);
            return Ok(());
        }

        self.generate_expression(operand)?;
        self.emit(&format!("move {}, {}", registers::ARG, registers::ACC));
        let call = match operand.ty {
            DataType::Char => syscalls::PRINT_CHAR,
            _ => syscalls::PRINT_INT,
        };
        self.emit_syscall(call);
        Ok(())
    }

    fn generate_newline(&mut self) {
        self.emit(&format!("la {}, {}", registers::ARG, NEWLINE_LABEL));
        self.emit_syscall(syscalls::PRINT_STRING);
    }
}

/// Quote string constant text for an `.asciiz` directive.
///
/// The escapes `\n`, `\t`, `\0` and `\\` pass through to the assembler. Any
/// other backslash, or a double quote, is escaped so that it prints as written.
pub fn escape_asciiz(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next @ ('n' | 't' | '0' | '\\')) => {
                    chars.next();
                    escaped.push('\\');
                    escaped.push(next);
                }
                _ => escaped.push_str("\\\\"),
            },
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}
