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

//! Control flow statement parsing for the parser.
//!
//! This module provides control flow statement parsing:
//! - `se (...) entao ... senao ...`
//! - `enquanto (...) execute ...`
//!
//! The filler keywords `entao` and `execute` are optional.

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::Parser;
use crate::ast::{Statement, StatementKind};
use crate::error::CompileError;
use crate::lexer::Token;

/// Extension trait for control flow parsing.
pub trait ControlFlowParser {
    /// Parse an if statement.
    fn parse_if_statement(&mut self) -> Result<Statement, CompileError>;

    /// Parse a while statement.
    fn parse_while_statement(&mut self) -> Result<Statement, CompileError>;
}

impl<'a> ControlFlowParser for Parser<'a> {
    fn parse_if_statement(&mut self) -> Result<Statement, CompileError> {
        let (_, start) = self.expect(&Token::Se, "Expected 'se'")?;

        self.expect(&Token::LeftParen, "Expected '(' after 'se'")?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen, "Expected ')' after condition")?;
        self.match_token(&Token::Entao);

        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.match_token(&Token::Senao) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        let span = start.merge(&self.previous_span());
        Ok(Statement::new(
            StatementKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    fn parse_while_statement(&mut self) -> Result<Statement, CompileError> {
        let (_, start) = self.expect(&Token::Enquanto, "Expected 'enquanto'")?;

        self.expect(&Token::LeftParen, "Expected '(' after 'enquanto'")?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen, "Expected ')' after condition")?;
        self.match_token(&Token::Execute);

        let body = Box::new(self.parse_statement()?);

        let span = start.merge(&self.previous_span());
        Ok(Statement::new(StatementKind::While { condition, body }, span))
    }
}
