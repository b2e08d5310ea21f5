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

//! Abstract Syntax Tree (AST) definitions for the Goianinha compiler.
//!
//! This module defines the data structures that represent a parsed Goianinha
//! program. Lists are owned vectors in declaration order. Semantic analysis
//! fills in the `ty` of every expression and the `symbol` of every
//! declaration and identifier; nothing else changes after parsing.

mod expr;
mod stmt;
mod types;

pub use expr::*;
pub use stmt::*;
pub use types::*;

use crate::error::Span;

/// A complete Goianinha program.
#[derive(Debug, Clone)]
pub struct Program {
    /// Global variables and functions, in source order.
    pub declarations: Vec<Declaration>,
    /// The `principal` block.
    pub body: Block,
    /// The source span of the whole program.
    pub span: Span,
}

impl Program {
    /// Create a new program.
    pub fn new(declarations: Vec<Declaration>, body: Block, span: Span) -> Self {
        Self {
            declarations,
            body,
            span,
        }
    }

    /// Iterate over the declared functions.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Function(func) => Some(func),
            Declaration::Variable(_) => None,
        })
    }

    /// Iterate over the global variables.
    pub fn globals(&self) -> impl Iterator<Item = &VarDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Variable(var) => Some(var),
            Declaration::Function(_) => None,
        })
    }
}

/// A block: local declarations followed by statements.
#[derive(Debug, Clone)]
pub struct Block {
    /// Local variable declarations.
    pub declarations: Vec<VarDecl>,
    /// The statements in this block.
    pub statements: Vec<Statement>,
    /// The source span of this block.
    pub span: Span,
}

impl Block {
    /// Create a new block.
    pub fn new(declarations: Vec<VarDecl>, statements: Vec<Statement>, span: Span) -> Self {
        Self {
            declarations,
            statements,
            span,
        }
    }

    /// Create an empty block.
    pub fn empty(span: Span) -> Self {
        Self {
            declarations: Vec::new(),
            statements: Vec::new(),
            span,
        }
    }

    /// Check if this block is empty.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.statements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functions_and_globals_split() {
        let span = Span::at_line(1);
        let program = Program::new(
            vec![
                Declaration::Variable(VarDecl::new("g", DataType::Int, span)),
                Declaration::Function(FunctionDecl::new(
                    "f",
                    DataType::Int,
                    Vec::new(),
                    Block::empty(span),
                    span,
                )),
            ],
            Block::empty(span),
            span,
        );

        assert_eq!(program.functions().count(), 1);
        assert_eq!(program.globals().map(|v| v.name.as_str()).collect::<Vec<_>>(), ["g"]);
        assert!(program.body.is_empty());
    }
}
