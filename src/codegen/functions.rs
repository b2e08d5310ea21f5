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

//! Function code generation.
//!
//! This module provides code generation for:
//! - Function bodies with prologue and epilogue
//! - The `main` entry point built from the `principal` block
//! - Function calls
//!
//! Frame layout, from high to low addresses:
//!
//! ```text
//! arg 0 .. arg n-1   pushed by the caller
//! saved $ra          4($fp)
//! saved $fp          0($fp)
//! local 0           -4($fp)
//! local 1           -8($fp)
//! ```

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::labels::{function_label, return_label};
use super::mips::{registers, syscalls, ENTRY_LABEL, FRAME_HEADER_SIZE, WORD_SIZE};
use super::statements::StatementEmitter;
use super::variables::VariableManager;
use super::{unresolved, CodeGenerator, FunctionFrame};
use crate::ast::{Block, Expr, FunctionDecl, Identifier};
use crate::error::CompileError;
use log::debug;

/// Extension trait for function code generation.
pub trait FunctionEmitter {
    /// Generate a function declaration.
    fn generate_function(&mut self, func: &FunctionDecl) -> Result<(), CompileError>;

    /// Generate the `main` entry point from the program body.
    fn generate_main(&mut self, body: &Block) -> Result<(), CompileError>;

    /// Generate a call. The result is left in `$v0`.
    fn generate_call(&mut self, callee: &Identifier, args: &[Expr]) -> Result<(), CompileError>;
}

impl FunctionEmitter for CodeGenerator<'_> {
    fn generate_function(&mut self, func: &FunctionDecl) -> Result<(), CompileError> {
        let id = func.symbol.ok_or_else(|| unresolved(&func.name, func.span))?;
        if !self.generated_functions.insert(id) {
            debug!(
                "skipping redeclaration of function '{}' (line {})",
                func.name,
                func.span.line
            );
            return Ok(());
        }

        debug!("generating function '{}'", func.name);
        let ret_label = return_label(&func.name);

        self.emit_label(&function_label(&func.name));
        self.emit_comment(&format!("prologue of '{}'", func.name));
        self.emit_adjust_stack(-FRAME_HEADER_SIZE);
        self.emit(&format!("sw {}, 4({})", registers::RA, registers::SP));
        self.emit(&format!("sw {}, 0({})", registers::FP, registers::SP));
        self.emit(&format!("move {}, {}", registers::FP, registers::SP));

        self.frame = Some(FunctionFrame {
            name: func.name.clone(),
            param_count: func.params.len(),
            return_label: ret_label.clone(),
        });

        let frame_size = self.layout_locals(&func.body)?;
        self.emit_adjust_stack(-frame_size);

        self.emit_comment(&format!("body of '{}'", func.name));
        self.generate_block(&func.body)?;

        self.emit_comment(&format!("epilogue of '{}'", func.name));
        self.emit_label(&ret_label);
        self.emit(&format!("move {}, {}", registers::SP, registers::FP));
        self.emit(&format!("lw {}, 4({})", registers::RA, registers::SP));
        self.emit(&format!("lw {}, 0({})", registers::FP, registers::SP));
        self.emit_adjust_stack(FRAME_HEADER_SIZE);
        self.emit(&format!("jr {}", registers::RA));

        self.frame = None;
        Ok(())
    }

    fn generate_main(&mut self, body: &Block) -> Result<(), CompileError> {
        debug!("generating main");
        self.frame = None;

        self.emit_label(ENTRY_LABEL);
        self.emit(&format!("move {}, {}", registers::FP, registers::SP));
        let frame_size = self.layout_locals(body)?;
        self.emit_adjust_stack(-frame_size);

        self.generate_block(body)?;

        self.emit_comment("exit");
        self.emit(&format!("move {}, {}", registers::SP, registers::FP));
        self.emit_syscall(syscalls::EXIT);
        Ok(())
    }

    fn generate_call(&mut self, callee: &Identifier, args: &[Expr]) -> Result<(), CompileError> {
        for arg in args {
            self.generate_expression(arg)?;
            self.emit_push(registers::ACC);
        }

        self.emit(&format!("jal {}", function_label(&callee.name)));

        let pushed = i32::try_from(args.len()).unwrap_or(i32::MAX / WORD_SIZE);
        self.emit_adjust_stack(pushed * WORD_SIZE);
        Ok(())
    }
}
