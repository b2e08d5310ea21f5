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

//! Parser module for the Goianinha compiler.
//!
//! This module parses a token stream into an Abstract Syntax Tree (AST).
//! It uses recursive descent with one method per precedence level for
//! expressions. The first syntax error aborts parsing.
//!
//! # Module Structure
//!
//! - `blocks` - Block, function and global declaration parsing (BlockParser trait)
//! - `control_flow` - `se` and `enquanto` parsing (ControlFlowParser trait)
//! - `expressions` - Expression parsing (ExpressionParser trait)
//! - `helpers` - Token stream navigation and error handling (ParserHelpers trait)
//! - `statements` - Statement parsing (StatementParser trait)
//! - `types` - Type parsing (TypeParser trait)

// Submodules
pub mod blocks;
pub mod control_flow;
pub mod expressions;
pub mod helpers;
pub mod statements;
pub mod types;

// Internal imports from submodules
use blocks::BlockParser;
use helpers::ParserHelpers;

use crate::ast::Program;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::Token;

/// The parser state.
pub struct Parser<'a> {
    /// The token stream to parse.
    pub(crate) tokens: &'a [(Token, Span)],
    /// Current position in the token stream.
    pub(crate) position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    // ========================================
    // Program Parsing
    // ========================================

    /// Parse the complete program.
    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let start = self.current_span();

        let mut declarations = Vec::new();
        while !self.check(&Token::Principal) {
            declarations.extend(self.parse_global_declaration()?);
        }

        self.expect(&Token::Principal, "Expected 'principal'")?;
        self.expect(&Token::LeftParen, "Expected '(' after 'principal'")?;
        self.expect(&Token::RightParen, "Expected ')' after 'principal('")?;
        let body = self.parse_block()?;

        if let Some(token) = self.peek() {
            return Err(self.error(
                ErrorCode::UnexpectedToken,
                format!("Unexpected {} after the 'principal' block", token),
            ));
        }

        let span = start.merge(&body.span);
        Ok(Program::new(declarations, body, span))
    }
}

/// Parse a token stream into a program AST.
pub fn parse(tokens: &[(Token, Span)]) -> Result<Program, CompileError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}
