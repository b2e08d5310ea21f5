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

//! Error types for the Goianinha compiler.
//!
//! This module defines all error types used throughout the compiler,
//! including lexical, syntax, semantic and internal code generation errors.
//! Diagnostics are reported by line number and message only.

use std::ops::Range;
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line of the first byte (1-indexed)
    pub line: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }

    /// Create a span that only knows its line.
    pub fn at_line(line: usize) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
        }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line.min(other.line),
        }
    }

    /// The byte range covered by this span.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Error codes for the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexical errors (E001-E030)
    InvalidCharacter,
    UnterminatedString,
    InvalidCharLiteral,
    UnterminatedComment,
    IntegerTooLarge,

    // Syntax errors (E100-E130)
    UnexpectedToken,
    UnexpectedEndOfFile,
    ExpectedExpression,
    ExpectedIdentifier,
    ExpectedType,
    InvalidType,
    MisplacedStringLiteral,
    ExpectedMainProgram,

    // Semantic errors (E200-E230)
    UndefinedVariable,
    VariableAlreadyDefined,
    LocalShadowsParameter,
    FunctionUsedAsValue,
    TypeMismatch,
    InvalidOperatorForType,
    CannotCompareTypes,
    ConditionNotInteger,
    InvalidReadTarget,
    InvalidWriteOperand,
    UndefinedFunction,
    FunctionAlreadyDefined,
    WrongNumberOfArguments,
    ArgumentTypeMismatch,
    ReturnTypeMismatch,
    CannotReturnValueFromVoid,
    MissingReturnValue,
    ReturnOutsideFunction,

    // Internal code generation faults (E900-E910)
    UnresolvedSymbol,
    MissingFrameSlot,
    OutsideFunction,
    UnexpectedNode,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::InvalidCharacter => "E001",
            ErrorCode::UnterminatedString => "E010",
            ErrorCode::InvalidCharLiteral => "E011",
            ErrorCode::UnterminatedComment => "E012",
            ErrorCode::IntegerTooLarge => "E020",

            // Syntax errors
            ErrorCode::UnexpectedToken => "E100",
            ErrorCode::UnexpectedEndOfFile => "E101",
            ErrorCode::ExpectedExpression => "E103",
            ErrorCode::ExpectedIdentifier => "E105",
            ErrorCode::ExpectedType => "E106",
            ErrorCode::InvalidType => "E108",
            ErrorCode::MisplacedStringLiteral => "E110",
            ErrorCode::ExpectedMainProgram => "E120",

            // Semantic errors
            ErrorCode::UndefinedVariable => "E200",
            ErrorCode::VariableAlreadyDefined => "E201",
            ErrorCode::LocalShadowsParameter => "E202",
            ErrorCode::FunctionUsedAsValue => "E203",
            ErrorCode::TypeMismatch => "E210",
            ErrorCode::InvalidOperatorForType => "E212",
            ErrorCode::CannotCompareTypes => "E213",
            ErrorCode::ConditionNotInteger => "E214",
            ErrorCode::InvalidReadTarget => "E215",
            ErrorCode::InvalidWriteOperand => "E216",
            ErrorCode::UndefinedFunction => "E220",
            ErrorCode::FunctionAlreadyDefined => "E221",
            ErrorCode::WrongNumberOfArguments => "E222",
            ErrorCode::ArgumentTypeMismatch => "E223",
            ErrorCode::ReturnTypeMismatch => "E224",
            ErrorCode::CannotReturnValueFromVoid => "E225",
            ErrorCode::MissingReturnValue => "E226",
            ErrorCode::ReturnOutsideFunction => "E227",

            // Internal faults
            ErrorCode::UnresolvedSymbol => "E900",
            ErrorCode::MissingFrameSlot => "E901",
            ErrorCode::OutsideFunction => "E902",
            ErrorCode::UnexpectedNode => "E903",
        }
    }

    /// Check if this code marks a compiler fault rather than a user error.
    pub fn is_internal(&self) -> bool {
        self.code().starts_with("E9")
    }
}

/// A compiler error with source location.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message} (line {})", .span.line)]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Create an error that is only anchored to a line.
    pub fn at_line(code: ErrorCode, message: impl Into<String>, line: usize) -> Self {
        Self::new(code, message, Span::at_line(line))
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// The source line this error refers to.
    pub fn line(&self) -> usize {
        self.span.line
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Every diagnostic of a compilation that did not produce assembly.
///
/// Lexing and parsing stop at their first error; semantic analysis
/// reports all of them.
#[derive(Debug, Clone, Error)]
#[error("compilation failed with {} error(s)", .errors.len())]
pub struct CompileFailure {
    /// Errors, in the order they were found.
    pub errors: Vec<CompileError>,
    /// Warnings collected before the failure.
    pub warnings: Vec<CompileError>,
}

impl CompileFailure {
    /// The first error, if any.
    pub fn first(&self) -> Option<&CompileError> {
        self.errors.first()
    }

    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl From<CompileError> for CompileFailure {
    fn from(error: CompileError) -> Self {
        Self {
            errors: vec![error],
            warnings: Vec::new(),
        }
    }
}

/// Fetch the text of a 1-indexed line, if it exists.
fn line_content(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line - 1)
}

fn format_diagnostic(
    severity: &str,
    error: &CompileError,
    source: &str,
    filename: Option<&str>,
) -> String {
    let filename = filename.unwrap_or("<input>");
    let line = error.span.line;

    let mut output = String::new();
    output.push_str(&format!(
        "{}[{}]: {}\n",
        severity,
        error.code_str(),
        error.message
    ));
    output.push_str(&format!("  --> {}:{}\n", filename, line));

    if let Some(content) = line_content(source, line) {
        let width = line.to_string().len();
        output.push_str(&format!("{:>width$} |\n", "", width = width));
        output.push_str(&format!("{:>width$} | {}\n", line, content, width = width));
    }

    if let Some(hint) = &error.hint {
        output.push_str(&format!("  = hint: {}\n", hint));
    }

    output
}

/// Format an error with its line and source context.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    format_diagnostic("error", error, source, filename)
}

/// Format a warning with its line and source context.
pub fn format_warning(warning: &CompileError, source: &str, filename: Option<&str>) -> String {
    format_diagnostic("warning", warning, source, filename)
}
