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

//! Operator checking for the semantic analyzer.
//!
//! This module provides type checking for binary and unary operators:
//! - Arithmetic operators (+, -, *, /) and negation
//! - Relational operators (==, !=, <, >, <=, >=)
//! - Logical operators (&&, ||, !)
//!
//! A failed check reports one error and yields `Void`.

use super::Analyzer;
use crate::ast::{BinaryOp, DataType, UnaryOp};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for operator type checking.
pub trait OperatorChecker {
    /// Check binary operator types and return result type.
    fn check_binary_op(
        &mut self,
        left: DataType,
        op: BinaryOp,
        right: DataType,
        span: Span,
    ) -> DataType;

    /// Check unary operator types and return result type.
    fn check_unary_op(&mut self, op: UnaryOp, operand: DataType, span: Span) -> DataType;
}

impl OperatorChecker for Analyzer {
    fn check_binary_op(
        &mut self,
        left: DataType,
        op: BinaryOp,
        right: DataType,
        span: Span,
    ) -> DataType {
        if op.is_comparison() {
            // Void operands were already reported.
            if !left.is_value() || !right.is_value() {
                return DataType::Void;
            }
            if left != right {
                self.error(
                    CompileError::new(
                        ErrorCode::CannotCompareTypes,
                        format!(
                            "Relational operator '{}' requires operands of the same type, found '{}' and '{}'",
                            op, left, right
                        ),
                        span,
                    ),
                );
                return DataType::Void;
            }
            return DataType::Int;
        }

        if left.is_int() && right.is_int() {
            return DataType::Int;
        }

        let kind = if op.is_logical() {
            "Logical"
        } else {
            "Arithmetic"
        };
        self.error(CompileError::new(
            ErrorCode::InvalidOperatorForType,
            format!(
                "{} operator '{}' requires 'int' operands, found '{}' and '{}'",
                kind, op, left, right
            ),
            span,
        ));
        DataType::Void
    }

    fn check_unary_op(&mut self, op: UnaryOp, operand: DataType, span: Span) -> DataType {
        if operand.is_int() {
            return DataType::Int;
        }

        self.error(CompileError::new(
            ErrorCode::InvalidOperatorForType,
            format!(
                "Operator '{}' requires an 'int' operand, found '{}'",
                op, operand
            ),
            span,
        ));
        DataType::Void
    }
}
