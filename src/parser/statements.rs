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

//! Statement parsing for the parser.
//!
//! This module provides statement parsing functionality:
//! - Statement dispatch by leading keyword
//! - `leia`, `escreva`, `novalinha` and `retorne`
//! - Nested blocks and expression statements

use super::blocks::BlockParser;
use super::control_flow::ControlFlowParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::{Expr, ExprKind, Identifier, Statement, StatementKind};
use crate::error::CompileError;
use crate::lexer::Token;

/// Extension trait for statement parsing.
pub trait StatementParser {
    /// Parse a statement.
    fn parse_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse `leia x;`.
    fn parse_read_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse `escreva ...;`.
    fn parse_write_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse `retorne [expr];`.
    fn parse_return_statement(&mut self) -> Result<Statement, CompileError>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_statement(&mut self) -> Result<Statement, CompileError> {
        let start = self.current_span();

        match self.peek() {
            Some(Token::Semicolon) => {
                self.advance();
                Ok(Statement::new(StatementKind::Empty, start))
            }
            Some(Token::Se) => self.parse_if_statement(),
            Some(Token::Enquanto) => self.parse_while_statement(),
            Some(Token::Leia) => self.parse_read_statement(),
            Some(Token::Escreva) => self.parse_write_statement(),
            Some(Token::Retorne) => self.parse_return_statement(),
            Some(Token::Novalinha) => {
                self.advance();
                let (_, end) =
                    self.expect(&Token::Semicolon, "Expected ';' after 'novalinha'")?;
                Ok(Statement::new(StatementKind::NewLine, start.merge(&end)))
            }
            Some(Token::LeftBrace) => {
                let block = self.parse_block()?;
                let span = block.span;
                Ok(Statement::new(StatementKind::Block(block), span))
            }
            _ => {
                let expr = self.parse_expression()?;
                let (_, end) = self.expect(&Token::Semicolon, "Expected ';' after expression")?;
                Ok(Statement::new(StatementKind::Expression(expr), start.merge(&end)))
            }
        }
    }

    fn parse_read_statement(&mut self) -> Result<Statement, CompileError> {
        let (_, start) = self.expect(&Token::Leia, "Expected 'leia'")?;
        let (name, _) = self.expect_identifier("Expected variable name after 'leia'")?;
        let (_, end) = self.expect(&Token::Semicolon, "Expected ';' after 'leia'")?;

        Ok(Statement::new(
            StatementKind::Read(Identifier::new(name)),
            start.merge(&end),
        ))
    }

    fn parse_write_statement(&mut self) -> Result<Statement, CompileError> {
        let (_, start) = self.expect(&Token::Escreva, "Expected 'escreva'")?;

        let operand = match self.peek() {
            Some(Token::String(text)) => {
                let text = text.clone();
                let span = self.current_span();
                self.advance();
                Expr::new(ExprKind::StringLiteral(text), span)
            }
            _ => self.parse_expression()?,
        };

        let (_, end) = self.expect(&Token::Semicolon, "Expected ';' after 'escreva'")?;
        Ok(Statement::new(StatementKind::Write(operand), start.merge(&end)))
    }

    fn parse_return_statement(&mut self) -> Result<Statement, CompileError> {
        let (_, start) = self.expect(&Token::Retorne, "Expected 'retorne'")?;

        let value = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        let (_, end) = self.expect(&Token::Semicolon, "Expected ';' after 'retorne'")?;
        Ok(Statement::new(StatementKind::Return(value), start.merge(&end)))
    }
}
