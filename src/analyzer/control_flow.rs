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

//! Control flow analysis for the semantic analyzer.
//!
//! This module provides control flow statement analysis:
//! - `se` statements with optional `senao`
//! - `enquanto` loops

use super::expressions::ExpressionAnalyzer;
use super::statements::StatementAnalyzer;
use super::Analyzer;
use crate::ast::{DataType, Expr, Statement};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for control flow analysis.
pub trait ControlFlowAnalyzer {
    /// Analyze an if statement.
    fn analyze_if_statement(
        &mut self,
        condition: &mut Expr,
        then_branch: &mut Statement,
        else_branch: Option<&mut Statement>,
        span: Span,
    );

    /// Analyze a while statement.
    fn analyze_while_statement(&mut self, condition: &mut Expr, body: &mut Statement, span: Span);

    /// Check that a condition has type `int`.
    fn check_condition(&mut self, condition: &mut Expr, keyword: &str, span: Span);
}

impl ControlFlowAnalyzer for Analyzer {
    fn analyze_if_statement(
        &mut self,
        condition: &mut Expr,
        then_branch: &mut Statement,
        else_branch: Option<&mut Statement>,
        span: Span,
    ) {
        self.check_condition(condition, "se", span);

        // Branches are analyzed even after a bad condition.
        self.analyze_statement(then_branch);
        if let Some(else_branch) = else_branch {
            self.analyze_statement(else_branch);
        }
    }

    fn analyze_while_statement(&mut self, condition: &mut Expr, body: &mut Statement, span: Span) {
        self.check_condition(condition, "enquanto", span);
        self.analyze_statement(body);
    }

    fn check_condition(&mut self, condition: &mut Expr, keyword: &str, span: Span) {
        let ty = self.analyze_expression(condition);
        if ty != DataType::Int {
            self.error(CompileError::new(
                ErrorCode::ConditionNotInteger,
                format!(
                    "Condition of '{}' must be of type 'int', found '{}'",
                    keyword, ty
                ),
                span,
            ));
        }
    }
}
