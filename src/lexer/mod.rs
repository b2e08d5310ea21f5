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

//! Lexer module for the Goianinha compiler.
//!
//! This module tokenizes Goianinha source code into a stream of tokens.
//! It handles:
//! - Keywords and identifiers
//! - Integer, character and string literals
//! - Operators and punctuation
//! - Block comments (`/* ... */`)
//!
//! Token recognition is derived with `logos`; this module adds line
//! tracking and maps lexer failures onto compiler errors.

mod tokens;

pub use tokens::{LexError, Token};

use crate::error::{CompileError, ErrorCode, Span};
use logos::Logos;

/// Counts lines incrementally as the token stream advances.
struct LineTracker<'source> {
    source: &'source str,
    offset: usize,
    line: usize,
}

impl<'source> LineTracker<'source> {
    fn new(source: &'source str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
        }
    }

    /// Line of the byte at `position`. Positions must not decrease.
    fn line_at(&mut self, position: usize) -> usize {
        if position > self.offset {
            let end = position.min(self.source.len());
            self.line += self.source.as_bytes()[self.offset..end]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.offset = end;
        }
        self.line
    }
}

fn lex_error(error: LexError, slice: &str, span: Span) -> CompileError {
    match error {
        LexError::InvalidCharacter => {
            let shown = slice.chars().next().unwrap_or(' ');
            CompileError::new(
                ErrorCode::InvalidCharacter,
                format!("Invalid character '{}'", shown.escape_default()),
                span,
            )
        }
        LexError::UnterminatedString => CompileError::new(
            ErrorCode::UnterminatedString,
            "Unterminated string literal",
            span,
        )
        .with_hint("string literals must be closed on the same line"),
        LexError::InvalidCharLiteral => CompileError::new(
            ErrorCode::InvalidCharLiteral,
            "Invalid character constant",
            span,
        )
        .with_hint("a character constant holds exactly one character, e.g. 'a' or '\\n'"),
        LexError::UnterminatedComment => CompileError::new(
            ErrorCode::UnterminatedComment,
            "Unterminated comment",
            span,
        )
        .with_hint("close the comment with */"),
        LexError::IntegerTooLarge => CompileError::new(
            ErrorCode::IntegerTooLarge,
            format!("Integer literal '{}' is too large", slice),
            span,
        ),
    }
}

/// Tokenize source code into a vector of tokens.
///
/// Comments and whitespace are dropped. The first lexical error aborts
/// tokenization.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, CompileError> {
    let mut lexer = Token::lexer(source);
    let mut lines = LineTracker::new(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start, range.end, lines.line_at(range.start));

        match result {
            Ok(Token::Comment) => {}
            Ok(token) => tokens.push((token, span)),
            Err(error) => return Err(lex_error(error, lexer.slice(), span)),
        }
    }

    Ok(tokens)
}
