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

//! Statement analysis for the semantic analyzer.
//!
//! This module provides statement analysis functionality:
//! - Blocks and the scopes they open
//! - Variable declarations
//! - `leia` and `escreva`
//! - Statement dispatch to appropriate handlers

use super::control_flow::ControlFlowAnalyzer;
use super::expressions::ExpressionAnalyzer;
use super::functions::FunctionAnalyzer;
use super::Analyzer;
use crate::ast::{Block, Expr, Identifier, Statement, StatementKind, VarDecl};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for statement analysis.
pub trait StatementAnalyzer {
    /// Analyze a statement.
    fn analyze_statement(&mut self, stmt: &mut Statement);

    /// Analyze a block inside a fresh scope.
    fn analyze_block(&mut self, block: &mut Block);

    /// Analyze a block's declarations and statements in the current scope.
    fn analyze_block_contents(&mut self, block: &mut Block);

    /// Analyze a variable declaration.
    fn analyze_var_decl(&mut self, decl: &mut VarDecl);

    /// Analyze a `leia` target.
    fn analyze_read(&mut self, target: &mut Identifier, span: Span);

    /// Analyze an `escreva` operand.
    fn analyze_write(&mut self, operand: &mut Expr, span: Span);
}

impl StatementAnalyzer for Analyzer {
    fn analyze_statement(&mut self, stmt: &mut Statement) {
        let span = stmt.span;

        match &mut stmt.kind {
            StatementKind::Empty | StatementKind::NewLine => {}
            StatementKind::Expression(expr) => {
                self.analyze_expression(expr);
            }
            StatementKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.analyze_if_statement(condition, then_branch, else_branch.as_deref_mut(), span);
            }
            StatementKind::While { condition, body } => {
                self.analyze_while_statement(condition, body, span);
            }
            StatementKind::Read(target) => self.analyze_read(target, span),
            StatementKind::Write(operand) => self.analyze_write(operand, span),
            StatementKind::Return(value) => self.analyze_return(value.as_mut(), span),
            StatementKind::Block(block) => self.analyze_block(block),
        }
    }

    fn analyze_block(&mut self, block: &mut Block) {
        self.symbols.push_scope();
        self.analyze_block_contents(block);
        self.symbols.pop_scope();
    }

    fn analyze_block_contents(&mut self, block: &mut Block) {
        for decl in &mut block.declarations {
            self.analyze_var_decl(decl);
        }
        for stmt in &mut block.statements {
            self.analyze_statement(stmt);
        }
    }

    fn analyze_var_decl(&mut self, decl: &mut VarDecl) {
        if self.context.in_function() {
            let shadows_parameter = self
                .symbols
                .resolve(&decl.name)
                .is_some_and(|(_, symbol)| symbol.is_parameter());

            if shadows_parameter {
                self.error(
                    CompileError::new(
                        ErrorCode::LocalShadowsParameter,
                        format!("Local variable '{}' has the same name as a parameter", decl.name),
                        decl.span,
                    )
                    .with_hint("rename the local variable"),
                );
                return;
            }
        }

        match self
            .symbols
            .insert_variable(&decl.name, decl.var_type, -1, decl.span)
        {
            Ok(id) => decl.symbol = Some(id),
            Err(existing) => {
                self.warning(CompileError::new(
                    ErrorCode::VariableAlreadyDefined,
                    format!(
                        "Variable '{}' is already declared in this scope; the first declaration is kept",
                        decl.name
                    ),
                    decl.span,
                ));
                decl.symbol = Some(existing);
            }
        }
    }

    fn analyze_read(&mut self, target: &mut Identifier, span: Span) {
        let resolved = self
            .symbols
            .resolve(&target.name)
            .map(|(id, symbol)| (id, symbol.is_function(), symbol.data_type()));

        match resolved {
            Some((id, false, ty)) if ty.is_value() => target.symbol = Some(id),
            Some((_, true, _)) => self.error(CompileError::new(
                ErrorCode::InvalidReadTarget,
                format!("Cannot 'leia' into function '{}'", target.name),
                span,
            )),
            _ => self.error(CompileError::new(
                ErrorCode::InvalidReadTarget,
                format!("Variable '{}' in 'leia' is not declared", target.name),
                span,
            )),
        }
    }

    fn analyze_write(&mut self, operand: &mut Expr, span: Span) {
        if operand.is_string_literal() {
            return;
        }

        if !self.analyze_expression(operand).is_value() {
            self.error(CompileError::new(
                ErrorCode::InvalidWriteOperand,
                "Cannot 'escreva' a 'void' or undeclared expression",
                span,
            ));
        }
    }
}
