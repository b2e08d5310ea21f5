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

//! Assignment code generation.
//!
//! The destination address is computed first and kept on the stack while
//! the value is evaluated, since evaluation may clobber `$t0`. The assigned
//! value stays in `$v0`, so chained assignments work.

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::mips::registers;
use super::variables::VariableManager;
use super::CodeGenerator;
use crate::ast::{Expr, Identifier};
use crate::error::{CompileError, Span};

/// Extension trait for assignment code generation.
pub trait AssignmentEmitter {
    /// Generate `target = value`.
    fn generate_assignment(
        &mut self,
        target: &Identifier,
        value: &Expr,
        span: Span,
    ) -> Result<(), CompileError>;
}

impl AssignmentEmitter for CodeGenerator<'_> {
    fn generate_assignment(
        &mut self,
        target: &Identifier,
        value: &Expr,
        span: Span,
    ) -> Result<(), CompileError> {
        self.emit_variable_address(target, span)?;
        self.emit_push(registers::ADDR);
        self.generate_expression(value)?;
        self.emit_pop(registers::ADDR);
        self.emit(&format!("sw {}, 0({})", registers::ACC, registers::ADDR));
        Ok(())
    }
}
