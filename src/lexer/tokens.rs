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

//! Token definitions for the Goianinha language.

use logos::Logos;

/// Failure reported by a lexer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    InvalidCharacter,
    /// A string literal without its closing quote on the same line.
    UnterminatedString,
    /// A character constant that is empty, too long or badly escaped.
    InvalidCharLiteral,
    /// A block comment without its closing `*/`.
    UnterminatedComment,
    /// An integer literal that does not fit in 32 bits.
    IntegerTooLarge,
}

/// A token in the Goianinha language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Literals
    /// Integer literal.
    #[regex("[0-9]+", parse_integer)]
    Integer(i32),
    /// String literal (content between the quotes, verbatim).
    #[token("\"", lex_string)]
    String(String),
    /// Character constant.
    #[token("'", lex_char)]
    Char(char),
    /// Identifier (variable or function name).
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Type keywords
    /// `int` - integer type.
    #[token("int")]
    Int,
    /// `car` - character type.
    #[token("car")]
    Car,
    /// `void` - no value (return type only).
    #[token("void")]
    Void,

    // Structure keywords
    /// `principal` - program entry block.
    #[token("principal")]
    Principal,
    /// `funcao` - function declaration.
    #[token("funcao")]
    Funcao,

    // Statement keywords
    /// `se` - conditional statement.
    #[token("se")]
    Se,
    /// `entao` - optional filler after a condition.
    #[token("entao")]
    Entao,
    /// `senao` - else branch.
    #[token("senao")]
    Senao,
    /// `enquanto` - while loop.
    #[token("enquanto")]
    Enquanto,
    /// `execute` - optional filler after a loop condition.
    #[token("execute")]
    Execute,
    /// `leia` - read an integer.
    #[token("leia")]
    Leia,
    /// `escreva` - write a value or string.
    #[token("escreva")]
    Escreva,
    /// `novalinha` - write a newline.
    #[token("novalinha")]
    Novalinha,
    /// `retorne` - return from function.
    #[token("retorne")]
    Retorne,

    // Arithmetic operators
    /// `+` - addition.
    #[token("+")]
    Plus,
    /// `-` - subtraction or negation.
    #[token("-")]
    Minus,
    /// `*` - multiplication.
    #[token("*")]
    Star,
    /// `/` - division.
    #[token("/")]
    Slash,

    // Comparison operators
    /// `==` - equal.
    #[token("==")]
    EqualEqual,
    /// `!=` - not equal.
    #[token("!=")]
    BangEqual,
    /// `<` - less than.
    #[token("<")]
    Less,
    /// `>` - greater than.
    #[token(">")]
    Greater,
    /// `<=` - less or equal.
    #[token("<=")]
    LessEqual,
    /// `>=` - greater or equal.
    #[token(">=")]
    GreaterEqual,

    // Logical operators
    /// `&&` - logical AND.
    #[token("&&")]
    AndAnd,
    /// `||` - logical OR.
    #[token("||")]
    OrOr,
    /// `!` - logical NOT.
    #[token("!")]
    Bang,

    /// `=` - assignment.
    #[token("=")]
    Equal,

    // Punctuation
    /// `(` - left parenthesis.
    #[token("(")]
    LeftParen,
    /// `)` - right parenthesis.
    #[token(")")]
    RightParen,
    /// `{` - left brace.
    #[token("{")]
    LeftBrace,
    /// `}` - right brace.
    #[token("}")]
    RightBrace,
    /// `,` - comma.
    #[token(",")]
    Comma,
    /// `;` - semicolon.
    #[token(";")]
    Semicolon,

    /// Block comment. Filtered out by `tokenize`.
    #[token("/*", block_comment)]
    Comment,
}

fn parse_integer(lex: &mut logos::Lexer<Token>) -> Result<i32, LexError> {
    lex.slice()
        .parse::<i32>()
        .map_err(|_| LexError::IntegerTooLarge)
}

fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexError> {
    let rest = lex.remainder();
    match rest.find(['"', '\n']) {
        Some(end) if rest[end..].starts_with('"') => {
            let content = rest[..end].to_string();
            lex.bump(end + 1);
            Ok(content)
        }
        Some(end) => {
            lex.bump(end);
            Err(LexError::UnterminatedString)
        }
        None => {
            lex.bump(rest.len());
            Err(LexError::UnterminatedString)
        }
    }
}

fn lex_char(lex: &mut logos::Lexer<Token>) -> Result<char, LexError> {
    let rest = lex.remainder();
    let mut chars = rest.chars();

    let (value, consumed) = match chars.next() {
        Some('\\') => {
            let escaped = match chars.next() {
                Some('n') => '\n',
                Some('t') => '\t',
                Some('0') => '\0',
                Some('\\') => '\\',
                Some('\'') => '\'',
                _ => return Err(LexError::InvalidCharLiteral),
            };
            (escaped, 2)
        }
        Some(c) if c != '\'' && c != '\n' => (c, c.len_utf8()),
        _ => return Err(LexError::InvalidCharLiteral),
    };

    if !rest[consumed..].starts_with('\'') {
        return Err(LexError::InvalidCharLiteral);
    }
    lex.bump(consumed + 1);
    Ok(value)
}

fn block_comment(lex: &mut logos::Lexer<Token>) -> Result<(), LexError> {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Ok(())
        }
        None => {
            lex.bump(rest.len());
            Err(LexError::UnterminatedComment)
        }
    }
}

impl Token {
    /// Check if this token names a variable type.
    pub fn is_type(&self) -> bool {
        matches!(self, Token::Int | Token::Car)
    }

    /// Check if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Int
                | Token::Car
                | Token::Void
                | Token::Principal
                | Token::Funcao
                | Token::Se
                | Token::Entao
                | Token::Senao
                | Token::Enquanto
                | Token::Execute
                | Token::Leia
                | Token::Escreva
                | Token::Novalinha
                | Token::Retorne
        )
    }

    /// Check if this token is a comparison operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Token::EqualEqual
                | Token::BangEqual
                | Token::Less
                | Token::Greater
                | Token::LessEqual
                | Token::GreaterEqual
        )
    }

    /// Get a human-readable name for this token type.
    pub fn name(&self) -> &'static str {
        match self {
            Token::Integer(_) => "integer",
            Token::String(_) => "string",
            Token::Char(_) => "character",
            Token::Identifier(_) => "identifier",
            Token::Int => "'int'",
            Token::Car => "'car'",
            Token::Void => "'void'",
            Token::Principal => "'principal'",
            Token::Funcao => "'funcao'",
            Token::Se => "'se'",
            Token::Entao => "'entao'",
            Token::Senao => "'senao'",
            Token::Enquanto => "'enquanto'",
            Token::Execute => "'execute'",
            Token::Leia => "'leia'",
            Token::Escreva => "'escreva'",
            Token::Novalinha => "'novalinha'",
            Token::Retorne => "'retorne'",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::EqualEqual => "'=='",
            Token::BangEqual => "'!='",
            Token::Less => "'<'",
            Token::Greater => "'>'",
            Token::LessEqual => "'<='",
            Token::GreaterEqual => "'>='",
            Token::AndAnd => "'&&'",
            Token::OrOr => "'||'",
            Token::Bang => "'!'",
            Token::Equal => "'='",
            Token::LeftParen => "'('",
            Token::RightParen => "')'",
            Token::LeftBrace => "'{'",
            Token::RightBrace => "'}'",
            Token::Comma => "','",
            Token::Semicolon => "';'",
            Token::Comment => "comment",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{}", n),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Char(c) => write!(f, "'{}'", c.escape_default()),
            Token::Identifier(s) => write!(f, "{}", s),
            _ => write!(f, "{}", self.name()),
        }
    }
}
