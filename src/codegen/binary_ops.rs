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

//! Binary operation code generation.
//!
//! All binary operators evaluate the left operand, push it, evaluate the
//! right operand, pop the left one into `$t1` and combine:
//! - Arithmetic: `addu`, `subu`, `mult`/`div` with `mflo`
//! - Relational: see the `comparisons` module
//! - Logical: both operands normalised to 0/1, then `and`/`or`
//!
//! Both operands of `&&` and `||` are always evaluated.

use super::comparisons::{comparison_mnemonic, ComparisonHelpers};
use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::mips::registers::{ACC, SCRATCH};
use super::CodeGenerator;
use crate::ast::{BinaryOp, Expr};
use crate::error::CompileError;

/// Extension trait for binary operation code generation.
pub trait BinaryOpsEmitter {
    /// Generate `left op right`, leaving the result in `$v0`.
    fn generate_binary_op(
        &mut self,
        left: &Expr,
        op: BinaryOp,
        right: &Expr,
    ) -> Result<(), CompileError>;

    /// Combine `$t1` (left) and `$v0` (right) into `$v0`.
    fn emit_binary_combine(&mut self, op: BinaryOp);
}

impl BinaryOpsEmitter for CodeGenerator<'_> {
    fn generate_binary_op(
        &mut self,
        left: &Expr,
        op: BinaryOp,
        right: &Expr,
    ) -> Result<(), CompileError> {
        self.generate_expression(left)?;
        self.emit_push(ACC);
        self.generate_expression(right)?;
        self.emit_pop(SCRATCH);
        self.emit_binary_combine(op);
        Ok(())
    }

    fn emit_binary_combine(&mut self, op: BinaryOp) {
        if let Some(mnemonic) = comparison_mnemonic(op) {
            self.emit_comparison(mnemonic);
            return;
        }

        match op {
            BinaryOp::Add => self.emit(&format!("addu {}, {}, {}", ACC, SCRATCH, ACC)),
            BinaryOp::Sub => self.emit(&format!("subu {}, {}, {}", ACC, SCRATCH, ACC)),
            BinaryOp::Mul => {
                self.emit(&format!("mult {}, {}", SCRATCH, ACC));
                self.emit(&format!("mflo {}", ACC));
            }
            BinaryOp::Div => {
                self.emit(&format!("div {}, {}", SCRATCH, ACC));
                self.emit(&format!("mflo {}", ACC));
            }
            BinaryOp::And | BinaryOp::Or => {
                self.emit_normalize(SCRATCH);
                self.emit_normalize(ACC);
                let mnemonic = if op == BinaryOp::And { "and" } else { "or" };
                self.emit(&format!("{} {}, {}, {}", mnemonic, ACC, SCRATCH, ACC));
            }
            // Relational operators were handled above.
            _ => {}
        }
    }
}
