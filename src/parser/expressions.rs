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

//! Expression parsing for the parser.
//!
//! This module provides expression parsing functionality:
//! - Right associative assignment
//! - One method per binary precedence level
//! - Unary operators
//! - Primary expressions (literals, identifiers, calls, grouping)

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::{BinaryOp, Expr, ExprKind, Identifier, UnaryOp};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for expression parsing.
pub trait ExpressionParser {
    /// Parse an expression (including assignment).
    fn parse_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an `||` expression.
    fn parse_or_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an `&&` expression.
    fn parse_and_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an equality expression.
    fn parse_equality_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a relational expression.
    fn parse_relational_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse an additive expression.
    fn parse_additive_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a multiplicative expression.
    fn parse_multiplicative_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a unary expression.
    fn parse_unary_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse a primary expression.
    fn parse_primary_expression(&mut self) -> Result<Expr, CompileError>;

    /// Parse the argument list of a call, after the callee name.
    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, CompileError>;
}

/// Build a left associative binary node.
fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let span = left.span.merge(&right.span);
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expression(&mut self) -> Result<Expr, CompileError> {
        let is_assignment = matches!(self.peek(), Some(Token::Identifier(_)))
            && matches!(self.peek_ahead(1), Some(Token::Equal));

        if !is_assignment {
            return self.parse_or_expression();
        }

        let (name, start) = self.expect_identifier("Expected variable name")?;
        self.expect(&Token::Equal, "Expected '='")?;
        let value = self.parse_expression()?;
        let span = start.merge(&value.span);

        Ok(Expr::new(
            ExprKind::Assign {
                target: Identifier::new(name),
                value: Box::new(value),
            },
            span,
        ))
    }

    fn parse_or_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_and_expression()?;

        while self.match_token(&Token::OrOr) {
            let right = self.parse_and_expression()?;
            left = binary(left, BinaryOp::Or, right);
        }

        Ok(left)
    }

    fn parse_and_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_equality_expression()?;

        while self.match_token(&Token::AndAnd) {
            let right = self.parse_equality_expression()?;
            left = binary(left, BinaryOp::And, right);
        }

        Ok(left)
    }

    fn parse_equality_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_relational_expression()?;

        loop {
            let op = match self.peek() {
                Some(Token::EqualEqual) => BinaryOp::Equal,
                Some(Token::BangEqual) => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_relational_expression()?;
            left = binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_relational_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_additive_expression()?;

        loop {
            let op = match self.peek() {
                Some(Token::Less) => BinaryOp::Less,
                Some(Token::Greater) => BinaryOp::Greater,
                Some(Token::LessEqual) => BinaryOp::LessEqual,
                Some(Token::GreaterEqual) => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive_expression()?;
            left = binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_additive_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_multiplicative_expression()?;

        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative_expression()?;
            left = binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expr, CompileError> {
        let mut left = self.parse_unary_expression()?;

        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary_expression()?;
            left = binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary_expression(&mut self) -> Result<Expr, CompileError> {
        let op = match self.peek() {
            Some(Token::Minus) => UnaryOp::Negate,
            Some(Token::Bang) => UnaryOp::Not,
            _ => return self.parse_primary_expression(),
        };

        let start = self.current_span();
        self.advance();
        let operand = self.parse_unary_expression()?;
        let span = start.merge(&operand.span);

        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_primary_expression(&mut self) -> Result<Expr, CompileError> {
        let span = self.current_span();

        match self.peek().cloned() {
            Some(Token::Integer(n)) => {
                self.advance();
                Ok(Expr::new(ExprKind::IntLiteral(n), span))
            }
            Some(Token::Char(c)) => {
                self.advance();
                Ok(Expr::new(ExprKind::CharLiteral(c), span))
            }
            Some(Token::Identifier(name)) => {
                self.advance();
                if self.check(&Token::LeftParen) {
                    let args = self.parse_call_arguments()?;
                    let span = span.merge(&self.previous_span());
                    Ok(Expr::new(
                        ExprKind::Call {
                            callee: Identifier::new(name),
                            args,
                        },
                        span,
                    ))
                } else {
                    Ok(Expr::new(ExprKind::Identifier(Identifier::new(name)), span))
                }
            }
            Some(Token::LeftParen) => {
                self.advance();
                let mut inner = self.parse_expression()?;
                self.expect(&Token::RightParen, "Expected ')' after expression")?;
                inner.span = span.merge(&self.previous_span());
                Ok(inner)
            }
            Some(Token::String(_)) => Err(self
                .error(
                    ErrorCode::MisplacedStringLiteral,
                    "String literals are only allowed as the operand of 'escreva'",
                )
                .with_hint("write the string with its own 'escreva' statement")),
            Some(token) if token.is_type() => Err(self
                .error(
                    ErrorCode::ExpectedExpression,
                    format!("Expected expression, found {}", token),
                )
                .with_hint("declarations must come before the statements of a block")),
            Some(token) => Err(self.error(
                ErrorCode::ExpectedExpression,
                format!("Expected expression, found {}", token),
            )),
            None => Err(self.error(
                ErrorCode::UnexpectedEndOfFile,
                "Expected expression, found end of file",
            )),
        }
    }

    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, CompileError> {
        self.expect(&Token::LeftParen, "Expected '(' after function name")?;

        let mut args = Vec::new();
        if !self.check(&Token::RightParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
        }

        self.expect(&Token::RightParen, "Expected ')' after arguments")?;
        Ok(args)
    }
}
