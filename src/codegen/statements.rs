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

//! Statement code generation.
//!
//! Dispatches each statement kind to its emitter. Declarations are not
//! revisited here: their slots were assigned when the enclosing frame was
//! laid out.

use super::control_flow::ControlFlowEmitter;
use super::expressions::ExpressionEmitter;
use super::io::IoEmitter;
use super::CodeGenerator;
use crate::ast::{Block, Statement, StatementKind};
use crate::error::CompileError;

/// Extension trait for statement code generation.
pub trait StatementEmitter {
    /// Generate one statement.
    fn generate_statement(&mut self, stmt: &Statement) -> Result<(), CompileError>;

    /// Generate the statements of a block.
    fn generate_block(&mut self, block: &Block) -> Result<(), CompileError>;
}

impl StatementEmitter for CodeGenerator<'_> {
    fn generate_statement(&mut self, stmt: &Statement) -> Result<(), CompileError> {
        match &stmt.kind {
            StatementKind::Empty => Ok(()),
            StatementKind::Expression(expr) => self.generate_expression(expr),
            StatementKind::If {
                condition,
                then_branch,
                else_branch,
            } => self.generate_if(condition, then_branch, else_branch.as_deref()),
            StatementKind::While { condition, body } => self.generate_while(condition, body),
            StatementKind::Read(target) => self.generate_read(target, stmt.span),
            StatementKind::Write(operand) => self.generate_write(operand),
            StatementKind::Return(value) => self.generate_return(value.as_ref(), stmt.span),
            StatementKind::NewLine => {
                self.generate_newline();
                Ok(())
            }
            StatementKind::Block(block) => self.generate_block(block),
        }
    }

    fn generate_block(&mut self, block: &Block) -> Result<(), CompileError> {
        for stmt in &block.statements {
            self.generate_statement(stmt)?;
        }
        Ok(())
    }
}
