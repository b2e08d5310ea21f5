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

//! Block and declaration parsing for the parser.
//!
//! This module provides:
//! - Block parsing (local declarations followed by statements)
//! - Variable declaration lists (`int a, b;`)
//! - Function declarations
//! - Global declarations

use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::types::TypeParser;
use super::Parser;
use crate::ast::{Block, DataType, Declaration, FunctionDecl, Param, VarDecl};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::Token;

/// Extension trait for block and declaration parsing.
pub trait BlockParser {
    /// Parse a `{ ... }` block.
    fn parse_block(&mut self) -> Result<Block, CompileError>;

    /// Parse the names of a declaration list after its type.
    fn parse_variable_list(&mut self, var_type: DataType) -> Result<Vec<VarDecl>, CompileError>;

    /// Parse a function declaration starting at `funcao`.
    fn parse_function_declaration(&mut self) -> Result<FunctionDecl, CompileError>;

    /// Parse a parameter list including the parentheses.
    fn parse_parameters(&mut self) -> Result<Vec<Param>, CompileError>;

    /// Parse one global declaration (possibly declaring several variables).
    fn parse_global_declaration(&mut self) -> Result<Vec<Declaration>, CompileError>;
}

impl<'a> BlockParser for Parser<'a> {
    fn parse_block(&mut self) -> Result<Block, CompileError> {
        let (_, start) = self.expect(&Token::LeftBrace, "Expected '{'")?;

        let mut declarations = Vec::new();
        while self.check_any(&[Token::Int, Token::Car, Token::Void]) {
            let var_type = self.parse_var_type()?;
            declarations.extend(self.parse_variable_list(var_type)?);
        }

        let mut statements = Vec::new();
        while !self.check(&Token::RightBrace) {
            if self.is_at_end() {
                return Err(self.unexpected("Expected '}' to close block"));
            }
            statements.push(self.parse_statement()?);
        }

        let (_, end) = self.expect(&Token::RightBrace, "Expected '}'")?;
        Ok(Block::new(declarations, statements, start.merge(&end)))
    }

    fn parse_variable_list(&mut self, var_type: DataType) -> Result<Vec<VarDecl>, CompileError> {
        let mut vars = Vec::new();

        loop {
            let (name, span) = self.expect_identifier("Expected variable name")?;
            vars.push(VarDecl::new(name, var_type, span));
            if !self.match_token(&Token::Comma) {
                break;
            }
        }

        self.expect(&Token::Semicolon, "Expected ';' after variable declaration")?;
        Ok(vars)
    }

    fn parse_function_declaration(&mut self) -> Result<FunctionDecl, CompileError> {
        let (_, start) = self.expect(&Token::Funcao, "Expected 'funcao'")?;
        let return_type = self.parse_return_type()?;
        let (name, _) = self.expect_identifier("Expected function name")?;
        let params = self.parse_parameters()?;
        let body = self.parse_block()?;
        let span = start.merge(&body.span);

        Ok(FunctionDecl::new(name, return_type, params, body, span))
    }

    fn parse_parameters(&mut self) -> Result<Vec<Param>, CompileError> {
        self.expect(&Token::LeftParen, "Expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.check(&Token::RightParen) {
            loop {
                let param_type = self.parse_var_type()?;
                let (name, span) = self.expect_identifier("Expected parameter name")?;
                params.push(Param::new(name, param_type, span));
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
        }

        self.expect(&Token::RightParen, "Expected ')' after parameters")?;
        Ok(params)
    }

    fn parse_global_declaration(&mut self) -> Result<Vec<Declaration>, CompileError> {
        match self.peek() {
            Some(Token::Funcao) => Ok(vec![Declaration::Function(
                self.parse_function_declaration()?,
            )]),
            Some(Token::Int) | Some(Token::Car) | Some(Token::Void) => {
                let var_type = self.parse_var_type()?;
                let vars = self.parse_variable_list(var_type)?;
                Ok(vars.into_iter().map(Declaration::Variable).collect())
            }
            Some(token) => Err(self.error(
                ErrorCode::UnexpectedToken,
                format!(
                    "Expected 'funcao', a variable declaration or 'principal', found {}",
                    token
                ),
            )),
            None => Err(self
                .error(
                    ErrorCode::ExpectedMainProgram,
                    "Missing 'principal' block",
                )
                .with_hint("every program ends with 'principal() { ... }'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn tokens_for(source: &str) -> Vec<(Token, crate::error::Span)> {
        tokenize(source).unwrap()
    }

    #[test]
    fn test_block_declarations_before_statements() {
        let tokens = tokens_for("{ int a, b; car c; a = 1; }");
        let mut parser = Parser::new(&tokens);
        let block = parser.parse_block().unwrap();
        let names: Vec<_> = block.declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(block.declarations[2].var_type, DataType::Char);
        assert_eq!(block.statements.len(), 1);
    }

    #[test]
    fn test_function_declaration() {
        let tokens = tokens_for("funcao int soma(int a, car b) { retorne a; }");
        let mut parser = Parser::new(&tokens);
        let func = parser.parse_function_declaration().unwrap();
        assert_eq!(func.name, "soma");
        assert_eq!(func.return_type, DataType::Int);
        assert_eq!(func.params.len(), 2);
        assert_eq!(func.params[1].param_type, DataType::Char);
    }

    #[test]
    fn test_void_parameter_rejected() {
        let tokens = tokens_for("funcao int f(void x) { }");
        let mut parser = Parser::new(&tokens);
        let err = parser.parse_function_declaration().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidType);
    }

    #[test]
    fn test_unclosed_block() {
        let tokens = tokens_for("{ escreva 1;");
        let mut parser = Parser::new(&tokens);
        let err = parser.parse_block().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedEndOfFile);
    }

    #[test]
    fn test_global_variable_list() {
        let tokens = tokens_for("int x, y;");
        let mut parser = Parser::new(&tokens);
        let decls = parser.parse_global_declaration().unwrap();
        assert_eq!(decls.len(), 2);
        assert!(matches!(decls[0], Declaration::Variable(_)));
    }
}
