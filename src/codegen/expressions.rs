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

//! Expression code generation.
//!
//! This module provides code generation for all expression kinds:
//! - Integer and character literals
//! - Variable reads
//! - Assignments, binary and unary operations
//! - Function calls
//!
//! Every expression leaves its value in `$v0`.

use super::assignments::AssignmentEmitter;
use super::binary_ops::BinaryOpsEmitter;
use super::emit::EmitHelpers;
use super::functions::FunctionEmitter;
use super::mips::registers;
use super::unary_ops::UnaryOpsEmitter;
use super::variables::VariableManager;
use super::CodeGenerator;
use crate::ast::{Expr, ExprKind};
use crate::error::{CompileError, ErrorCode};

/// Extension trait for expression code generation.
pub trait ExpressionEmitter {
    /// Generate code for an expression, leaving its value in `$v0`.
    fn generate_expression(&mut self, expr: &Expr) -> Result<(), CompileError>;
}

impl ExpressionEmitter for CodeGenerator<'_> {
    fn generate_expression(&mut self, expr: &Expr) -> Result<(), CompileError> {
        match &expr.kind {
            ExprKind::IntLiteral(value) => {
                self.emit_load_immediate(i64::from(*value));
                Ok(())
            }
            ExprKind::CharLiteral(c) => {
                self.emit_load_immediate(i64::from(u32::from(*c)));
                Ok(())
            }
            ExprKind::StringLiteral(_) => Err(CompileError::new(
                ErrorCode::UnexpectedNode,
                "String literal reached code generation outside 'escreva'",
                expr.span,
            )),
            ExprKind::Identifier(ident) => {
                self.emit_variable_address(ident, expr.span)?;
                self.emit(&format!("lw {}, 0({})", registers::ACC, registers::ADDR));
                Ok(())
            }
            ExprKind::Assign { target, value } => self.generate_assignment(target, value, expr.span),
            ExprKind::Binary { left, op, right } => self.generate_binary_op(left, *op, right),
            ExprKind::Unary { op, operand } => self.generate_unary_op(*op, operand),
            ExprKind::Call { callee, args } => self.generate_call(callee, args),
        }
    }
}
