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

//! Semantic analyzer module for the Goianinha compiler.
//!
//! This module performs semantic analysis on the AST:
//! - Scope management (program, function and block scopes)
//! - Symbol resolution (variables, parameters, functions)
//! - Type checking per construct
//! - Error collection without stopping at the first error
//!
//! Analysis annotates the tree in place and hands the symbol arena on to
//! code generation.
//!
//! # Module Structure
//!
//! - `context` - Current function tracking (AnalysisContext)
//! - `control_flow` - `se` / `enquanto` analysis (ControlFlowAnalyzer trait)
//! - `expressions` - Expression typing (ExpressionAnalyzer trait)
//! - `functions` - Declarations, calls, returns (FunctionAnalyzer trait)
//! - `operators` - Operator rules (OperatorChecker trait)
//! - `scope` - One lexical scope
//! - `statements` - Statements and blocks (StatementAnalyzer trait)
//! - `symbol` - Symbols, handles and the arena
//! - `symbol_table` - The scope stack

mod context;
mod control_flow;
mod expressions;
mod functions;
mod operators;
mod scope;
mod statements;
mod symbol;
mod symbol_table;

pub use context::AnalysisContext;
pub use scope::Scope;
pub use symbol::{ParamDescriptor, Symbol, SymbolArena, SymbolId, SymbolKind};
pub use symbol_table::SymbolTable;

use crate::ast::{Declaration, Program};
use crate::error::CompileError;
use functions::FunctionAnalyzer;
use log::{debug, info};
use statements::StatementAnalyzer;

/// The semantic analyzer.
pub struct Analyzer {
    /// The symbol table.
    pub symbols: SymbolTable,
    /// Collected errors.
    errors: Vec<CompileError>,
    /// Collected warnings.
    warnings: Vec<CompileError>,
    /// Analysis context.
    context: AnalysisContext,
}

/// Result of semantic analysis.
#[derive(Debug)]
pub struct Analysis {
    /// Every symbol declared in the program.
    pub symbols: SymbolArena,
    /// Errors, in the order they were found.
    pub errors: Vec<CompileError>,
    /// Non-fatal diagnostics such as redeclarations.
    pub warnings: Vec<CompileError>,
}

impl Analysis {
    /// Number of errors found.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Check if the program can be passed to code generation.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Analyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            context: AnalysisContext::default(),
        }
    }

    /// Analyze a program, annotating it in place.
    pub fn analyze(&mut self, program: &mut Program) {
        self.symbols.push_scope();

        for decl in &mut program.declarations {
            match decl {
                Declaration::Function(func) => self.analyze_function_decl(func),
                Declaration::Variable(var) => self.analyze_var_decl(var),
            }
        }

        debug!("analyzing 'principal'");
        self.analyze_block(&mut program.body);

        self.symbols.pop_scope();
    }

    /// Add an error to the error list.
    pub fn error(&mut self, error: CompileError) {
        debug!("semantic error: {}", error);
        self.errors.push(error);
    }

    /// Add a warning to the warning list.
    pub fn warning(&mut self, warning: CompileError) {
        debug!("semantic warning: {}", warning);
        self.warnings.push(warning);
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Finish analysis and hand over the symbols and diagnostics.
    pub fn finish(self) -> Analysis {
        info!(
            "semantic analysis finished: {} symbol(s), {} error(s), {} warning(s)",
            self.symbols.arena().len(),
            self.errors.len(),
            self.warnings.len()
        );
        Analysis {
            symbols: self.symbols.into_arena(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a program for semantic correctness.
pub fn analyze(program: &mut Program) -> Analysis {
    let mut analyzer = Analyzer::new();
    analyzer.analyze(program);
    analyzer.finish()
}
