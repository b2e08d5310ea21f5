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

//! Variable storage for code generation.
//!
//! This module lays out stack frames and resolves identifiers to
//! addresses:
//! - Globals live in `.data` words labelled `glob_<name>`
//! - Parameters sit above the saved registers, addressed from `$fp`
//! - Locals, including those of nested blocks, sit below `$fp`

use super::emit::EmitHelpers;
use super::mips::{local_offset, parameter_offset, registers, WORD_SIZE};
use super::{unresolved, CodeGenerator};
use crate::ast::{Block, Identifier, Statement, StatementKind};
use crate::error::{CompileError, ErrorCode, Span};
use log::debug;

/// Where a variable is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A local at this offset from `$fp`.
    Frame(i32),
    /// A global with this label.
    Global(String),
}

/// Extension trait for variable layout and addressing.
pub trait VariableManager {
    /// Assign frame slots to every local declared in `body` or in blocks
    /// nested inside it. Returns the number of bytes to reserve.
    fn layout_locals(&mut self, body: &Block) -> Result<i32, CompileError>;

    /// Assign slots to the locals of one block, then recurse.
    fn layout_block(&mut self, block: &Block) -> Result<(), CompileError>;

    /// Recurse into the blocks nested in a statement.
    fn layout_statement(&mut self, stmt: &Statement) -> Result<(), CompileError>;

    /// Load the address of `ident` into `$t0`.
    fn emit_variable_address(&mut self, ident: &Identifier, span: Span) -> Result<(), CompileError>;
}

impl VariableManager for CodeGenerator<'_> {
    fn layout_locals(&mut self, body: &Block) -> Result<i32, CompileError> {
        self.next_local = 0;
        self.layout_block(body)?;
        let count = i32::try_from(self.next_local).unwrap_or(i32::MAX / WORD_SIZE);
        Ok(count * WORD_SIZE)
    }

    fn layout_block(&mut self, block: &Block) -> Result<(), CompileError> {
        for decl in &block.declarations {
            let id = decl
                .symbol
                .ok_or_else(|| unresolved(&decl.name, decl.span))?;

            // A redeclaration reuses the first declaration's slot.
            if self.slots.contains_key(&id) {
                continue;
            }

            let offset = local_offset(self.next_local);
            debug!("local '{}' at {}({})", decl.name, offset, registers::FP);
            self.slots.insert(id, Slot::Frame(offset));
            self.next_local += 1;
        }

        for stmt in &block.statements {
            self.layout_statement(stmt)?;
        }
        Ok(())
    }

    fn layout_statement(&mut self, stmt: &Statement) -> Result<(), CompileError> {
        match &stmt.kind {
            StatementKind::Block(block) => self.layout_block(block),
            StatementKind::If {
                then_branch,
                else_branch,
                ..
            } => {
                self.layout_statement(then_branch)?;
                match else_branch {
                    Some(else_branch) => self.layout_statement(else_branch),
                    None => Ok(()),
                }
            }
            StatementKind::While { body, .. } => self.layout_statement(body),
            _ => Ok(()),
        }
    }

    fn emit_variable_address(&mut self, ident: &Identifier, span: Span) -> Result<(), CompileError> {
        let id = ident.symbol.ok_or_else(|| unresolved(&ident.name, span))?;
        let symbol = self.symbol(id, span)?;

        match symbol.position() {
            Some(position) if position >= 0 => {
                let frame = self.frame.as_ref().ok_or_else(|| {
                    CompileError::new(
                        ErrorCode::OutsideFunction,
                        format!("Parameter '{}' accessed outside its function", ident.name),
                        span,
                    )
                })?;
                let offset = parameter_offset(position, frame.param_count);
                self.emit(&format!(
                    "addiu {}, {}, {}",
                    registers::ADDR,
                    registers::FP,
                    offset
                ));
                Ok(())
            }
            Some(_) => match self.slots.get(&id).cloned() {
                Some(Slot::Frame(offset)) => {
                    self.emit(&format!(
                        "addiu {}, {}, {}",
                        registers::ADDR,
                        registers::FP,
                        offset
                    ));
                    Ok(())
                }
                Some(Slot::Global(label)) => {
                    self.emit(&format!("la {}, {}", registers::ADDR, label));
                    Ok(())
                }
                None => Err(CompileError::new(
                    ErrorCode::MissingFrameSlot,
                    format!("Variable '{}' has no storage slot", ident.name),
                    span,
                )),
            },
            None => Err(CompileError::new(
                ErrorCode::UnexpectedNode,
                format!("Function '{}' used as a variable", ident.name),
                span,
            )),
        }
    }
}
