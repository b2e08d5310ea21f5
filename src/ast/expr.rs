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

//! Expression AST nodes for the Goianinha compiler.

use super::DataType;
use crate::analyzer::SymbolId;
use crate::error::Span;

/// An expression in the Goianinha language.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source span of this expression.
    pub span: Span,
    /// Type computed by semantic analysis (`Void` until then).
    pub ty: DataType,
}

impl Expr {
    /// Create a new, not yet analyzed expression.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self {
            kind,
            span,
            ty: DataType::Void,
        }
    }

    /// Source line of this expression.
    pub fn line(&self) -> usize {
        self.span.line
    }

    /// Check if this expression is a string literal.
    pub fn is_string_literal(&self) -> bool {
        matches!(self.kind, ExprKind::StringLiteral(_))
    }
}

/// A reference to a named entity, resolved during analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The name as written in the source.
    pub name: String,
    /// The symbol this name resolved to.
    pub symbol: Option<SymbolId>,
}

impl Identifier {
    /// Create an unresolved identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: None,
        }
    }
}

/// The kind of expression.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// An integer literal.
    IntLiteral(i32),

    /// A character literal.
    CharLiteral(char),

    /// A string literal (only valid as a write operand).
    StringLiteral(String),

    /// A variable reference.
    Identifier(Identifier),

    /// An assignment; its value is the assigned value.
    Assign {
        target: Identifier,
        value: Box<Expr>,
    },

    /// A binary operation.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// A unary operation.
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// A function call.
    Call { callee: Identifier, args: Vec<Expr> },
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Check if this is an arithmetic operator.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div
        )
    }

    /// Check if this is a comparison operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::Less
                | BinaryOp::Greater
                | BinaryOp::LessEqual
                | BinaryOp::GreaterEqual
        )
    }

    /// Check if this is a logical operator.
    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        };
        write!(f, "{}", s)
    }
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical NOT (`!`).
    Not,
    /// Arithmetic negation (`-`).
    Negate,
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::Negate => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::IntLiteral(n) => write!(f, "{}", n),
            ExprKind::CharLiteral(c) => write!(f, "'{}'", c.escape_default()),
            ExprKind::StringLiteral(s) => write!(f, "\"{}\"", s),
            ExprKind::Identifier(id) => write!(f, "{}", id.name),
            ExprKind::Assign { target, value } => write!(f, "({} = {})", target.name, value),
            ExprKind::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            ExprKind::Unary { op, operand } => write!(f, "({}{})", op, operand),
            ExprKind::Call { callee, args } => {
                write!(f, "{}(", callee.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
