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

//! Negative/Error tests for the Goianinha compiler.
//!
//! These tests verify that the compiler rejects invalid programs with the
//! expected error codes and line numbers.

use goianinha::{compile, lexer, parser, ErrorCode};
use test_case::test_case;

/// Error codes of a failed compilation, in order.
fn error_codes(source: &str) -> Vec<ErrorCode> {
    match compile(source) {
        Ok(_) => Vec::new(),
        Err(failure) => failure.errors.iter().map(|e| e.code).collect(),
    }
}

// ============================================================================
// Lexer Error Tests
// ============================================================================

#[test_case("principal() { @ }", ErrorCode::InvalidCharacter; "at_sign")]
#[test_case("principal() { x = 1 & 2; }", ErrorCode::InvalidCharacter; "single_ampersand")]
#[test_case("principal() { escreva \"abc\n\"; }", ErrorCode::UnterminatedString; "newline_in_string")]
#[test_case("principal() { escreva \"abc", ErrorCode::UnterminatedString; "eof_in_string")]
#[test_case("principal() { escreva 'ab'; }", ErrorCode::InvalidCharLiteral; "two_chars")]
#[test_case("principal() { escreva ''; }", ErrorCode::InvalidCharLiteral; "empty_char")]
#[test_case("principal() { escreva '\\q'; }", ErrorCode::InvalidCharLiteral; "bad_escape")]
#[test_case("principal() { } /* sem fim", ErrorCode::UnterminatedComment; "open_comment")]
#[test_case("principal() { escreva 2147483648; }", ErrorCode::IntegerTooLarge; "i32_overflow")]
fn test_lexer_errors(source: &str, expected: ErrorCode) {
    let err = lexer::tokenize(source).unwrap_err();
    assert_eq!(err.code, expected);
}

#[test]
fn test_lexer_error_line_counts_through_comments() {
    let source = "/* linha 1\n linha 2 */\nprincipal() {\n  $\n}";
    let err = lexer::tokenize(source).unwrap_err();
    assert_eq!(err.line(), 4);
}

// ============================================================================
// Parser Error Tests
// ============================================================================

#[test_case("int x;", ErrorCode::ExpectedMainProgram; "missing_principal")]
#[test_case("principal() { escreva 1 }", ErrorCode::UnexpectedToken; "missing_semicolon")]
#[test_case("principal() { escreva 1;", ErrorCode::UnexpectedEndOfFile; "unclosed_block")]
#[test_case("principal() { } int x;", ErrorCode::UnexpectedToken; "trailing_declaration")]
#[test_case("principal() { x = \"a\"; }", ErrorCode::MisplacedStringLiteral; "string_in_assignment")]
#[test_case("principal() { escreva 1 + \"a\"; }", ErrorCode::MisplacedStringLiteral; "string_in_operand")]
#[test_case("principal() { leia 3; }", ErrorCode::ExpectedIdentifier; "read_literal")]
#[test_case("void v; principal() { }", ErrorCode::InvalidType; "void_global")]
#[test_case("funcao int f(void x) { } principal() { }", ErrorCode::InvalidType; "void_parameter")]
#[test_case("principal() { escreva ; }", ErrorCode::ExpectedExpression; "write_nothing")]
fn test_parser_errors(source: &str, expected: ErrorCode) {
    let tokens = lexer::tokenize(source).unwrap();
    let err = parser::parse(&tokens).unwrap_err();
    assert_eq!(err.code, expected);
}

#[test]
fn test_parser_stops_at_first_error() {
    let failure = compile("principal() {\n escreva 1\n escreva 2\n}").unwrap_err();
    assert_eq!(failure.error_count(), 1);
    assert_eq!(failure.errors[0].line(), 3);
}

// ============================================================================
// Semantic Error Tests
// ============================================================================

#[test_case("principal() { x = 1; }", &[ErrorCode::UndefinedVariable]; "undeclared_assignment")]
#[test_case("principal() { int x; car c; x = c; }", &[ErrorCode::TypeMismatch]; "assign_char_to_int")]
#[test_case("principal() { int x; x = 1 + 'a'; }", &[ErrorCode::InvalidOperatorForType]; "add_char")]
#[test_case("principal() { int x; x = 1 < 'a'; }", &[ErrorCode::CannotCompareTypes]; "compare_mixed")]
#[test_case("principal() { int x; x = -'a'; }", &[ErrorCode::InvalidOperatorForType]; "negate_char")]
#[test_case("principal() { escreva 1 + 'a'; }", &[ErrorCode::InvalidOperatorForType, ErrorCode::InvalidWriteOperand]; "write_bad_sum")]
#[test_case("principal() { se ('a') escreva 1; }", &[ErrorCode::ConditionNotInteger]; "char_condition")]
#[test_case("principal() { enquanto ('a') escreva 1; }", &[ErrorCode::ConditionNotInteger]; "char_loop_condition")]
#[test_case("funcao int f() { retorne 1; } principal() { leia f; }", &[ErrorCode::InvalidReadTarget]; "read_function")]
#[test_case("funcao void f() { } principal() { escreva f(); }", &[ErrorCode::InvalidWriteOperand]; "write_void")]
#[test_case("principal() { g(); }", &[ErrorCode::UndefinedFunction]; "undeclared_function")]
#[test_case("funcao int f() { retorne 1; } principal() { int x; x = f; }", &[ErrorCode::FunctionUsedAsValue]; "function_as_value")]
#[test_case("funcao int f() { retorne 'a'; } principal() { }", &[ErrorCode::ReturnTypeMismatch]; "return_wrong_type")]
#[test_case("funcao void f() { retorne 5; } principal() { }", &[ErrorCode::CannotReturnValueFromVoid]; "value_from_void")]
#[test_case("funcao int f() { retorne; } principal() { }", &[ErrorCode::MissingReturnValue]; "empty_return")]
#[test_case("principal() { retorne 1; }", &[ErrorCode::ReturnOutsideFunction]; "return_in_main")]
#[test_case("funcao int f(int a) { int a; retorne a; } principal() { }", &[ErrorCode::LocalShadowsParameter]; "local_shadows_parameter")]
fn test_semantic_errors(source: &str, expected: &[ErrorCode]) {
    assert_eq!(error_codes(source), expected);
}

#[test]
fn test_semantic_errors_accumulate() {
    let source = "principal() {\n  a = 1;\n  b = 2;\n  se ('c') escreva 3;\n}";
    let failure = compile(source).unwrap_err();
    let lines: Vec<_> = failure.errors.iter().map(|e| e.line()).collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

#[test]
fn test_redeclaration_is_only_a_warning() {
    assert!(compile("principal() { int a; int a; a = 1; }").is_ok());
    assert!(compile("funcao int f() { retorne 1; } funcao int f() { retorne 2; } principal() { }").is_ok());
}

#[test]
fn test_error_messages_name_the_identifier() {
    let failure = compile("principal() {\n  escreva contador;\n}").unwrap_err();
    assert!(failure.errors[0].message.contains("contador"));
    assert_eq!(failure.errors[0].line(), 2);
}
