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

//! Expression analysis for the semantic analyzer.
//!
//! This module provides expression type checking:
//! - Literal and identifier typing
//! - Assignment compatibility
//! - Operator dispatch
//!
//! Every analyzed expression gets its `ty` annotation written here.

use super::functions::FunctionAnalyzer;
use super::operators::OperatorChecker;
use super::Analyzer;
use crate::ast::{DataType, Expr, ExprKind, Identifier};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for expression analysis.
pub trait ExpressionAnalyzer {
    /// Analyze an expression, annotate it and return its type.
    fn analyze_expression(&mut self, expr: &mut Expr) -> DataType;

    /// Resolve an identifier used as a value.
    fn analyze_identifier(&mut self, id: &mut Identifier, span: Span) -> DataType;
}

impl ExpressionAnalyzer for Analyzer {
    fn analyze_expression(&mut self, expr: &mut Expr) -> DataType {
        let span = expr.span;

        let ty = match &mut expr.kind {
            ExprKind::IntLiteral(_) => DataType::Int,
            ExprKind::CharLiteral(_) => DataType::Char,
            // Strings are not values; `escreva` checks them structurally.
            ExprKind::StringLiteral(_) => DataType::Void,
            ExprKind::Identifier(id) => self.analyze_identifier(id, span),
            ExprKind::Assign { target, value } => {
                let target_type = self.analyze_identifier(target, span);
                let value_type = self.analyze_expression(value);

                if target_type.is_value() && value_type.is_value() && target_type != value_type {
                    self.error(CompileError::new(
                        ErrorCode::TypeMismatch,
                        format!(
                            "Cannot assign '{}' to '{}' of type '{}'",
                            value_type, target.name, target_type
                        ),
                        span,
                    ));
                }
                target_type
            }
            ExprKind::Binary { left, op, right } => {
                let left_type = self.analyze_expression(left);
                let right_type = self.analyze_expression(right);
                self.check_binary_op(left_type, *op, right_type, span)
            }
            ExprKind::Unary { op, operand } => {
                let operand_type = self.analyze_expression(operand);
                self.check_unary_op(*op, operand_type, span)
            }
            ExprKind::Call { callee, args } => self.analyze_call(callee, args, span),
        };

        expr.ty = ty;
        ty
    }

    fn analyze_identifier(&mut self, id: &mut Identifier, span: Span) -> DataType {
        let Some((symbol_id, symbol)) = self.symbols.resolve(&id.name) else {
            self.error(
                CompileError::new(
                    ErrorCode::UndefinedVariable,
                    format!("Undeclared identifier '{}'", id.name),
                    span,
                )
                .with_hint(format!("declare '{}' before using it", id.name)),
            );
            return DataType::Void;
        };

        let is_function = symbol.is_function();
        let ty = symbol.data_type();
        id.symbol = Some(symbol_id);

        if is_function {
            self.error(
                CompileError::new(
                    ErrorCode::FunctionUsedAsValue,
                    format!("Function '{}' used as a value", id.name),
                    span,
                )
                .with_hint(format!("call it as '{}(...)'", id.name)),
            );
            return DataType::Void;
        }

        ty
    }
}
