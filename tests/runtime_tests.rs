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

//! Runtime tests for the Goianinha compiler.
//!
//! These tests compile programs and run the generated assembly in the MIPS
//! interpreter from `tests/common`, checking what the programs print.

mod common;

use common::{run, run_with_input};
use pretty_assertions::assert_eq;

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_precedence() {
    assert_eq!(run("principal() { escreva 2 + 3 * 4; }"), "14");
    assert_eq!(run("principal() { escreva (2 + 3) * 4; }"), "20");
}

#[test]
fn test_left_associativity() {
    assert_eq!(run("principal() { escreva 20 - 8 - 2; }"), "10");
    assert_eq!(run("principal() { escreva 100 / 10 / 5; }"), "2");
}

#[test]
fn test_unary_minus() {
    assert_eq!(run("principal() { escreva -5 + 2; }"), "-3");
    assert_eq!(run("principal() { int x; x = 7; escreva -x; }"), "-7");
    assert_eq!(run("principal() { escreva - -4; }"), "4");
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(run("principal() { escreva -7 / 2; }"), "-3");
    assert_eq!(run("principal() { escreva 7 / -2; }"), "-3");
}

// ============================================================================
// Relational and logical operators
// ============================================================================

#[test]
fn test_comparisons_yield_zero_or_one() {
    let source = "principal() {
        escreva 3 < 5; escreva 5 < 3; escreva 4 <= 4; escreva 4 >= 5;
        escreva 2 == 2; escreva 2 != 2; escreva 9 > 1;
    }";
    assert_eq!(run(source), "1010101");
}

#[test]
fn test_char_comparison() {
    assert_eq!(run("principal() { escreva 'a' < 'b'; escreva 'z' == 'z'; }"), "11");
}

#[test]
fn test_logical_operators_normalise() {
    let source = "principal() {
        escreva 2 && 4; escreva 2 && 0; escreva 0 || 7; escreva 0 || 0;
        escreva !5; escreva !0;
    }";
    assert_eq!(run(source), "101001");
}

// ============================================================================
// Variables and assignment
// ============================================================================

#[test]
fn test_chained_assignment() {
    assert_eq!(
        run("principal() { int a, b; a = b = 7; escreva a + b; }"),
        "14"
    );
}

#[test]
fn test_assignment_is_an_expression() {
    assert_eq!(
        run("principal() { int a; escreva (a = 3) * 2; escreva a; }"),
        "63"
    );
}

#[test]
fn test_nested_block_shadowing() {
    let source = "principal() {
        int x;
        x = 1;
        { int x; x = 2; escreva x; }
        escreva x;
    }";
    assert_eq!(run(source), "21");
}

#[test]
fn test_globals_shared_between_functions() {
    let source = "int contador;
        funcao void incrementa() { contador = contador + 1; }
        principal() {
            contador = 10;
            incrementa(); incrementa(); incrementa();
            escreva contador;
        }";
    assert_eq!(run(source), "13");
}

#[test]
fn test_read_into_local_and_global() {
    let source = "int g;
        principal() { int l; leia l; leia g; escreva l - g; }";
    assert_eq!(run_with_input(source, &[50, 8]), "42");
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn test_if_else() {
    let source = "principal() {
        int x;
        x = 5;
        se (x > 3) entao escreva \"grande\"; senao escreva \"pequeno\";
        se (x > 9) escreva \"enorme\";
    }";
    assert_eq!(run(source), "grande");
}

#[test]
fn test_dangling_else_binds_inner() {
    let source = "principal() {
        se (1) se (0) escreva 1; senao escreva 2;
        se (0) se (1) escreva 3; senao escreva 4;
    }";
    assert_eq!(run(source), "2");
}

#[test]
fn test_while_sum() {
    let source = "principal() {
        int i, soma;
        i = 1; soma = 0;
        enquanto (i <= 10) execute { soma = soma + i; i = i + 1; }
        escreva soma;
    }";
    assert_eq!(run(source), "55");
}

#[test]
fn test_nested_loops_with_block_locals() {
    let source = "principal() {
        int i;
        i = 0;
        enquanto (i < 3) {
            int j;
            j = 0;
            enquanto (j < 2) { escreva i * 10 + j; escreva ' '; j = j + 1; }
            i = i + 1;
        }
    }";
    assert_eq!(run(source), "0 1 10 11 20 21 ");
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_parameter_order() {
    let source = "funcao int sub(int a, int b) { retorne a - b; }
        principal() { escreva sub(10, 3); }";
    assert_eq!(run(source), "7");
}

#[test]
fn test_three_parameters() {
    let source = "funcao int digitos(int a, int b, int c) { retorne a * 100 + b * 10 + c; }
        principal() { escreva digitos(1, 2, 3); }";
    assert_eq!(run(source), "123");
}

#[test]
fn test_arguments_evaluated_left_to_right() {
    let source = "int g;
        funcao int prox() { g = g + 1; retorne g; }
        funcao int junta(int a, int b) { retorne a * 10 + b; }
        principal() { g = 0; escreva junta(prox(), prox()); }";
    assert_eq!(run(source), "12");
}

#[test]
fn test_nested_calls_as_arguments() {
    let source = "funcao int dobro(int x) { retorne x * 2; }
        funcao int soma(int a, int b) { retorne a + b; }
        principal() { escreva soma(dobro(3), soma(dobro(1), 4)); }";
    assert_eq!(run(source), "12");
}

#[test]
fn test_function_locals_and_parameters() {
    let source = "funcao int f(int a, int b) {
            int t, u;
            t = a * 2;
            u = b * 3;
            retorne t + u;
        }
        principal() { escreva f(4, 5); }";
    assert_eq!(run(source), "23");
}

#[test]
fn test_early_return_from_void_function() {
    let source = "funcao void conta(int n) {
            se (n == 0) retorne;
            escreva n;
            conta(n - 1);
        }
        principal() { conta(3); }";
    assert_eq!(run(source), "321");
}

#[test]
fn test_return_inside_loop() {
    let source = "funcao int primeiro_multiplo(int n, int k) {
            int i;
            i = n;
            enquanto (1) { se ((i / k) * k == i) retorne i; i = i + 1; }
            retorne 0;
        }
        principal() { escreva primeiro_multiplo(10, 7); }";
    assert_eq!(run(source), "14");
}

#[test]
fn test_deep_recursion() {
    let source = "funcao int soma(int n) { se (n == 0) retorne 0; retorne n + soma(n - 1); }
        principal() { escreva soma(1000); }";
    assert_eq!(run(source), "500500");
}

#[test]
fn test_function_calls_earlier_function() {
    let source = "funcao int quadrado(int x) { retorne x * x; }
        funcao int soma_quadrados(int n) {
            int i, total;
            i = 1; total = 0;
            enquanto (i <= n) { total = total + quadrado(i); i = i + 1; }
            retorne total;
        }
        principal() { escreva soma_quadrados(4); }";
    assert_eq!(run(source), "30");
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_strings_and_newlines() {
    let source = "principal() { escreva \"a\\tb\"; novalinha; escreva \"fim\"; }";
    assert_eq!(run(source), "a\tb\nfim");
}

#[test]
fn test_strings_with_stray_backslashes() {
    let source = r#"principal() { escreva "C:\"; escreva "\q"; escreva "a\\b"; }"#;
    let assembly = common::compile(source);
    assert!(common::Machine::load(&assembly).is_ok(), "{}", assembly);
    assert_eq!(run(source), r"C:\\qa\b");
}

#[test]
fn test_char_output() {
    assert_eq!(run("principal() { car c; c = 'x'; escreva c; escreva '!'; }"), "x!");
}

// ============================================================================
// Fixture programs
// ============================================================================

#[test]
fn test_fixture_ola() {
    assert_eq!(run(include_str!("fixtures/ola.gyn")), "Ola, mundo!\n");
}

#[test]
fn test_fixture_fatorial() {
    let source = include_str!("fixtures/fatorial.gyn");
    assert_eq!(run_with_input(source, &[5]), "fatorial(5) = 120\n");
    assert_eq!(run_with_input(source, &[1]), "fatorial(1) = 1\n");
    assert_eq!(run_with_input(source, &[10]), "fatorial(10) = 3628800\n");
}

#[test]
fn test_fixture_fibonacci() {
    assert_eq!(
        run(include_str!("fixtures/fibonacci.gyn")),
        "0 1 1 2 3 5 8 13 21 34 \n"
    );
}

#[test]
fn test_fixture_mdc() {
    let source = include_str!("fixtures/mdc.gyn");
    assert_eq!(run_with_input(source, &[48, 18]), "6\n");
    assert_eq!(run_with_input(source, &[17, 5]), "1\n");
}

#[test]
fn test_fixture_caracteres() {
    assert_eq!(run(include_str!("fixtures/caracteres.gyn")), "kz\n");
}

#[test]
fn test_fixture_primos() {
    assert_eq!(
        run_with_input(include_str!("fixtures/primos.gyn"), &[20]),
        "2 3 5 7 11 13 17 19 \n"
    );
}
