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

//! Unary operation code generation.
//!
//! - `!x` yields 1 when `x` is zero, 0 otherwise
//! - `-x` is two's complement negation

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::mips::registers::{ACC, ZERO};
use super::CodeGenerator;
use crate::ast::{Expr, UnaryOp};
use crate::error::CompileError;

/// Extension trait for unary operation code generation.
pub trait UnaryOpsEmitter {
    /// Generate `op operand`, leaving the result in `$v0`.
    fn generate_unary_op(&mut self, op: UnaryOp, operand: &Expr) -> Result<(), CompileError>;
}

impl UnaryOpsEmitter for CodeGenerator<'_> {
    fn generate_unary_op(&mut self, op: UnaryOp, operand: &Expr) -> Result<(), CompileError> {
        self.generate_expression(operand)?;
        match op {
            UnaryOp::Not => self.emit(&format!("seq {}, {}, {}", ACC, ACC, ZERO)),
            UnaryOp::Negate => self.emit(&format!("subu {}, {}, {}", ACC, ZERO, ACC)),
        }
        Ok(())
    }
}
