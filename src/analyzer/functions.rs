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

//! Function analysis for the semantic analyzer.
//!
//! This module provides function-related analysis:
//! - Function declarations (symbol, parameters and body scope)
//! - Call checking against parameter descriptors
//! - Return statement validation

use super::context::AnalysisContext;
use super::expressions::ExpressionAnalyzer;
use super::statements::StatementAnalyzer;
use super::Analyzer;
use crate::ast::{DataType, Expr, FunctionDecl, Identifier};
use crate::error::{CompileError, ErrorCode, Span};
use log::debug;

/// Extension trait for function analysis.
pub trait FunctionAnalyzer {
    /// Analyze a function declaration.
    fn analyze_function_decl(&mut self, func: &mut FunctionDecl);

    /// Analyze a function call and return its result type.
    fn analyze_call(&mut self, callee: &mut Identifier, args: &mut [Expr], span: Span) -> DataType;

    /// Analyze a return statement.
    fn analyze_return(&mut self, value: Option<&mut Expr>, span: Span);
}

impl FunctionAnalyzer for Analyzer {
    fn analyze_function_decl(&mut self, func: &mut FunctionDecl) {
        debug!("analyzing function '{}'", func.name);

        // Declared before the body so recursive calls resolve.
        let (function_id, is_new) = match self.symbols.insert_function(
            &func.name,
            func.return_type,
            func.params.len(),
            func.span,
        ) {
            Ok(id) => (id, true),
            Err(existing) => {
                self.warning(CompileError::new(
                    ErrorCode::FunctionAlreadyDefined,
                    format!(
                        "Function '{}' is already declared in this scope; the first declaration is kept",
                        func.name
                    ),
                    func.span,
                ));
                (existing, false)
            }
        };
        func.symbol = Some(function_id);

        let previous = std::mem::replace(
            &mut self.context,
            AnalysisContext::for_function(&func.name, func.return_type, Some(function_id)),
        );

        // Parameters and the body's own declarations share one scope.
        self.symbols.push_scope();

        for (index, param) in func.params.iter_mut().enumerate() {
            match self
                .symbols
                .insert_parameter(&param.name, param.param_type, index, param.span)
            {
                Ok(id) => param.symbol = Some(id),
                Err(existing) => {
                    self.warning(CompileError::new(
                        ErrorCode::VariableAlreadyDefined,
                        format!("Parameter '{}' is declared twice", param.name),
                        param.span,
                    ));
                    param.symbol = Some(existing);
                }
            }
            if is_new {
                self.symbols
                    .add_parameter_descriptor(function_id, &param.name, param.param_type);
            }
        }

        self.analyze_block_contents(&mut func.body);

        self.symbols.pop_scope();
        self.context = previous;
    }

    fn analyze_call(&mut self, callee: &mut Identifier, args: &mut [Expr], span: Span) -> DataType {
        let function = self
            .symbols
            .resolve(&callee.name)
            .filter(|(_, symbol)| symbol.is_function())
            .map(|(id, symbol)| (id, symbol.params().to_vec(), symbol.data_type()));

        let Some((function_id, params, return_type)) = function else {
            self.error(CompileError::new(
                ErrorCode::UndefinedFunction,
                format!("Undeclared function '{}'", callee.name),
                span,
            ));
            for arg in args.iter_mut() {
                self.analyze_expression(arg);
            }
            return DataType::Void;
        };

        callee.symbol = Some(function_id);

        for (index, arg) in args.iter_mut().enumerate() {
            let arg_type = self.analyze_expression(arg);
            if let Some(param) = params.get(index) {
                if param.param_type != arg_type {
                    self.error(CompileError::new(
                        ErrorCode::ArgumentTypeMismatch,
                        format!(
                            "Wrong type for argument {} of function '{}': expected '{}', found '{}'",
                            index + 1,
                            callee.name,
                            param.param_type,
                            arg_type
                        ),
                        arg.span,
                    ));
                }
            }
        }

        if args.len() != params.len() {
            self.error(CompileError::new(
                ErrorCode::WrongNumberOfArguments,
                format!(
                    "Wrong number of arguments for function '{}': expected {}, found {}",
                    callee.name,
                    params.len(),
                    args.len()
                ),
                span,
            ));
        }

        return_type
    }

    fn analyze_return(&mut self, value: Option<&mut Expr>, span: Span) {
        let Some(expected) = self.context.return_type else {
            self.error(CompileError::new(
                ErrorCode::ReturnOutsideFunction,
                "'retorne' used outside of a function",
                span,
            ));
            return;
        };
        let function_name = self.context.function_name.clone().unwrap_or_default();

        match value {
            None => {
                if expected != DataType::Void {
                    self.error(CompileError::new(
                        ErrorCode::MissingReturnValue,
                        format!(
                            "Empty return in function '{}' that returns '{}'",
                            function_name, expected
                        ),
                        span,
                    ));
                }
            }
            Some(value) => {
                let actual = self.analyze_expression(value);
                if expected == DataType::Void {
                    self.error(CompileError::new(
                        ErrorCode::CannotReturnValueFromVoid,
                        format!("Returning a value from 'void' function '{}'", function_name),
                        span,
                    ));
                } else if expected != actual {
                    self.error(CompileError::new(
                        ErrorCode::ReturnTypeMismatch,
                        format!(
                            "Return type mismatch in function '{}': expected '{}', found '{}'",
                            function_name, expected, actual
                        ),
                        span,
                    ));
                }
            }
        }
    }
}
