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

//! Statement and declaration AST nodes for the Goianinha compiler.

use super::{Block, DataType, Expr, Identifier};
use crate::analyzer::SymbolId;
use crate::error::Span;

/// A statement in the Goianinha language.
#[derive(Debug, Clone)]
pub struct Statement {
    /// The kind of statement.
    pub kind: StatementKind,
    /// The source span of this statement.
    pub span: Span,
}

impl Statement {
    /// Create a new statement.
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Source line of this statement.
    pub fn line(&self) -> usize {
        self.span.line
    }
}

/// The kind of statement.
#[derive(Debug, Clone)]
pub enum StatementKind {
    /// A lone `;`.
    Empty,

    /// An expression evaluated for its effect.
    Expression(Expr),

    /// `se (cond) entao stmt [senao stmt]`.
    If {
        condition: Expr,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },

    /// `enquanto (cond) execute stmt`.
    While { condition: Expr, body: Box<Statement> },

    /// `leia x;`
    Read(Identifier),

    /// `escreva expr;` or `escreva "text";`
    Write(Expr),

    /// `retorne [expr];`
    Return(Option<Expr>),

    /// `novalinha;`
    NewLine,

    /// A nested block with its own scope.
    Block(Block),
}

/// A variable declaration.
#[derive(Debug, Clone)]
pub struct VarDecl {
    /// Variable name.
    pub name: String,
    /// Declared type.
    pub var_type: DataType,
    /// The source span.
    pub span: Span,
    /// Symbol created by analysis.
    pub symbol: Option<SymbolId>,
}

impl VarDecl {
    /// Create a new variable declaration.
    pub fn new(name: impl Into<String>, var_type: DataType, span: Span) -> Self {
        Self {
            name: name.into(),
            var_type,
            span,
            symbol: None,
        }
    }
}

/// A function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub param_type: DataType,
    /// The source span.
    pub span: Span,
    /// Symbol created by analysis.
    pub symbol: Option<SymbolId>,
}

impl Param {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, param_type: DataType, span: Span) -> Self {
        Self {
            name: name.into(),
            param_type,
            span,
            symbol: None,
        }
    }
}

/// A function declaration.
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    /// Function name.
    pub name: String,
    /// Return type (`Void` for procedures).
    pub return_type: DataType,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Function body. Shares its scope with the parameters.
    pub body: Block,
    /// The source span.
    pub span: Span,
    /// Symbol created by analysis.
    pub symbol: Option<SymbolId>,
}

impl FunctionDecl {
    /// Create a new function declaration.
    pub fn new(
        name: impl Into<String>,
        return_type: DataType,
        params: Vec<Param>,
        body: Block,
        span: Span,
    ) -> Self {
        Self {
            name: name.into(),
            return_type,
            params,
            body,
            span,
            symbol: None,
        }
    }
}

/// A global declaration.
#[derive(Debug, Clone)]
pub enum Declaration {
    /// A function declaration.
    Function(FunctionDecl),
    /// A global variable declaration.
    Variable(VarDecl),
}

impl Declaration {
    /// Source line of this declaration.
    pub fn line(&self) -> usize {
        match self {
            Declaration::Function(func) => func.span.line,
            Declaration::Variable(var) => var.span.line,
        }
    }
}
