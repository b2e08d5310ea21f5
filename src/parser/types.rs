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

//! Type parsing for the parser.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::DataType;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for type parsing.
pub trait TypeParser {
    /// Parse a variable or parameter type (`int` or `car`).
    fn parse_var_type(&mut self) -> Result<DataType, CompileError>;

    /// Parse a function return type (`int`, `car` or `void`).
    fn parse_return_type(&mut self) -> Result<DataType, CompileError>;
}

impl<'a> TypeParser for Parser<'a> {
    fn parse_var_type(&mut self) -> Result<DataType, CompileError> {
        match self.peek() {
            Some(Token::Int) => {
                self.advance();
                Ok(DataType::Int)
            }
            Some(Token::Car) => {
                self.advance();
                Ok(DataType::Char)
            }
            Some(Token::Void) => Err(self
                .error(
                    ErrorCode::InvalidType,
                    "'void' is not a valid variable type",
                )
                .with_hint("'void' may only be used as a function return type")),
            Some(token) => Err(self.error(
                ErrorCode::ExpectedType,
                format!("Expected type 'int' or 'car', found {}", token),
            )),
            None => Err(self.unexpected("Expected type")),
        }
    }

    fn parse_return_type(&mut self) -> Result<DataType, CompileError> {
        if self.match_token(&Token::Void) {
            return Ok(DataType::Void);
        }
        self.parse_var_type()
    }
}
