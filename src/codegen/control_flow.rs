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

//! Control flow code generation.
//!
//! This module provides code generation for:
//! - `se ... entao ... senao`
//! - `enquanto ... execute`
//! - `retorne`
//!
//! Conditions are treated as false when `$v0` is zero.

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::labels::LabelManager;
use super::mips::registers;
use super::statements::StatementEmitter;
use super::CodeGenerator;
use crate::ast::{Expr, Statement};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for control flow code generation.
pub trait ControlFlowEmitter {
    /// Generate an if statement.
    fn generate_if(
        &mut self,
        condition: &Expr,
        then_branch: &Statement,
        else_branch: Option<&Statement>,
    ) -> Result<(), CompileError>;

    /// Generate a while loop.
    fn generate_while(&mut self, condition: &Expr, body: &Statement) -> Result<(), CompileError>;

    /// Generate a return statement.
    fn generate_return(&mut self, value: Option<&Expr>, span: Span) -> Result<(), CompileError>;
}

impl ControlFlowEmitter for CodeGenerator<'_> {
    fn generate_if(
        &mut self,
        condition: &Expr,
        then_branch: &Statement,
        else_branch: Option<&Statement>,
    ) -> Result<(), CompileError> {
        let (else_label, end_label) = self.next_if_labels();

        self.generate_expression(condition)?;

        match else_branch {
            Some(else_branch) => {
                self.emit(&format!("beqz {}, {}", registers::ACC, else_label));
                self.generate_statement(then_branch)?;
                self.emit(&format!("j {}", end_label));
                self.emit_label(&else_label);
                self.generate_statement(else_branch)?;
            }
            None => {
                self.emit(&format!("beqz {}, {}", registers::ACC, end_label));
                self.generate_statement(then_branch)?;
            }
        }

        self.emit_label(&end_label);
        Ok(())
    }

    fn generate_while(&mut self, condition: &Expr, body: &Statement) -> Result<(), CompileError> {
        let (start_label, end_label) = self.next_while_labels();

        self.emit_label(&start_label);
        self.generate_expression(condition)?;
        self.emit(&format!("beqz {}, {}", registers::ACC, end_label));
        self.generate_statement(body)?;
        self.emit(&format!("j {}", start_label));
        self.emit_label(&end_label);
        Ok(())
    }

    fn generate_return(&mut self, value: Option<&Expr>, span: Span) -> Result<(), CompileError> {
        let return_label = match &self.frame {
            Some(frame) => frame.return_label.clone(),
            None => {
                return Err(CompileError::new(
                    ErrorCode::OutsideFunction,
                    "'retorne' reached code generation outside a function",
                    span,
                ))
            }
        };

        if let Some(value) = value {
            self.generate_expression(value)?;
        }
        self.emit(&format!("j {}", return_label));
        Ok(())
    }
}
