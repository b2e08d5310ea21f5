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

//! Code generation module for the Goianinha compiler.
//!
//! This module turns an analyzed program into MIPS32 assembly text for the
//! SPIM/MARS simulators. It is a stack machine: every expression leaves its
//! value in `$v0`, and intermediate values are pushed onto the stack.
//!
//! The generator is organized into submodules using extension traits:
//! - `emit`: Instruction, label and comment emission, push/pop
//! - `labels`: Unique label creation
//! - `variables`: Frame layout and variable addressing
//! - `functions`: Function bodies, `main` and calls
//! - `statements`: Statement dispatch
//! - `control_flow`: `se`, `enquanto` and `retorne`
//! - `io`: `leia`, `escreva` and `novalinha`
//! - `expressions`: Expression dispatch and literals
//! - `assignments`, `binary_ops`, `comparisons`, `unary_ops`: Operators
//!
//! The generator only runs on programs with zero semantic errors. Anything
//! it cannot resolve is reported as an internal fault (`E9xx`).

pub mod assignments;
pub mod binary_ops;
pub mod comparisons;
pub mod control_flow;
pub mod emit;
pub mod expressions;
pub mod functions;
pub mod io;
pub mod labels;
pub mod mips;
pub mod statements;
pub mod unary_ops;
pub mod variables;

use crate::analyzer::{Symbol, SymbolArena, SymbolId};
use crate::ast::Program;
use crate::error::{CompileError, ErrorCode, Span};
use emit::EmitHelpers;
use functions::FunctionEmitter;
use labels::global_label;
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use variables::Slot;

/// Options controlling the generated assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Emit `#` comments marking prologues, bodies and epilogues.
    pub emit_comments: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            emit_comments: true,
        }
    }
}

/// The function whose body is currently being generated.
#[derive(Debug, Clone)]
pub struct FunctionFrame {
    /// Function name.
    pub name: String,
    /// Number of parameters the caller pushes.
    pub param_count: usize,
    /// Label the epilogue starts at.
    pub return_label: String,
}

/// The MIPS code generator.
pub struct CodeGenerator<'a> {
    /// Symbols produced by semantic analysis.
    symbols: &'a SymbolArena,
    /// Output options.
    options: GeneratorOptions,
    /// The generated assembly text.
    output: String,
    /// Counter for `if_else_N` / `if_end_N`.
    if_counter: u32,
    /// Counter for `while_start_N` / `while_end_N`.
    while_counter: u32,
    /// Counter for `str_N`.
    string_counter: u32,
    /// Storage of every variable laid out so far.
    slots: HashMap<SymbolId, Slot>,
    /// Locals assigned in the frame being laid out.
    next_local: usize,
    /// The function being generated, `None` inside `main`.
    frame: Option<FunctionFrame>,
    /// Functions whose body was already emitted.
    generated_functions: HashSet<SymbolId>,
}

impl<'a> CodeGenerator<'a> {
    /// Create a new code generator over the analyzed symbols.
    pub fn new(symbols: &'a SymbolArena, options: GeneratorOptions) -> Self {
        Self {
            symbols,
            options,
            output: String::new(),
            if_counter: 0,
            while_counter: 0,
            string_counter: 0,
            slots: HashMap::new(),
            next_local: 0,
            frame: None,
            generated_functions: HashSet::new(),
        }
    }

    /// Generate the whole program.
    pub fn generate(&mut self, program: &Program) -> Result<(), CompileError> {
        info!(
            "generating MIPS assembly for {} declaration(s)",
            program.declarations.len()
        );

        self.emit_directive(".data");
        self.emit_label(mips::NEWLINE_LABEL);
        self.emit_directive(".asciiz \"\\n\"");
        self.generate_globals(program)?;

        self.output.push('\n');
        self.emit_directive(".text");
        self.emit_directive(&format!(".globl {}", mips::ENTRY_LABEL));

        self.emit_comment("--- functions ---");
        for func in program.functions() {
            self.generate_function(func)?;
        }

        self.emit_comment("--- main program ---");
        self.generate_main(&program.body)
    }

    /// Consume the generator and return the assembly text.
    pub fn finish(self) -> String {
        self.output
    }

    /// Reserve a `.data` word for each global variable.
    fn generate_globals(&mut self, program: &Program) -> Result<(), CompileError> {
        for global in program.globals() {
            let id = global
                .symbol
                .ok_or_else(|| unresolved(&global.name, global.span))?;

            // A redeclared global shares the first declaration's word.
            if self.slots.contains_key(&id) {
                continue;
            }

            let label = global_label(&global.name);
            debug!("global '{}' stored at '{}'", global.name, label);
            self.emit_label(&label);
            self.emit_directive(".word 0");
            self.slots.insert(id, Slot::Global(label));
        }
        Ok(())
    }

    /// Look up a symbol by id.
    fn symbol(&self, id: SymbolId, span: Span) -> Result<&'a Symbol, CompileError> {
        let symbols: &'a SymbolArena = self.symbols;
        symbols.get(id).ok_or_else(|| {
            CompileError::new(
                ErrorCode::UnresolvedSymbol,
                format!("Symbol #{} does not exist", id.index()),
                span,
            )
        })
    }
}

/// Error for a name the analyzer did not resolve.
fn unresolved(name: &str, span: Span) -> CompileError {
    CompileError::new(
        ErrorCode::UnresolvedSymbol,
        format!("Identifier '{}' reached code generation without a symbol", name),
        span,
    )
}

/// Generate MIPS assembly for an analyzed program.
///
/// `symbols` must be the arena returned by analysis of the same `program`.
pub fn generate(
    program: &Program,
    symbols: &SymbolArena,
    options: GeneratorOptions,
) -> Result<String, CompileError> {
    let mut generator = CodeGenerator::new(symbols, options);
    generator.generate(program)?;
    Ok(generator.finish())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{generate, GeneratorOptions};
    use crate::analyzer::analyze;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    /// Compile `source` to assembly without comments.
    pub fn assemble(source: &str) -> String {
        let tokens = tokenize(source).expect("lexing failed");
        let mut program = parse(&tokens).expect("parsing failed");
        let analysis = analyze(&mut program);
        assert!(analysis.is_ok(), "unexpected errors: {:?}", analysis.errors);
        generate(
            &program,
            &analysis.symbols,
            GeneratorOptions {
                emit_comments: false,
            },
        )
        .expect("generation failed")
    }

    /// Instruction lines of `asm`, trimmed.
    pub fn lines(asm: &str) -> Vec<&str> {
        asm.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Check that `needle` appears as a contiguous run of lines.
    pub fn contains_sequence(asm: &str, needle: &[&str]) -> bool {
        let lines = lines(asm);
        lines.windows(needle.len()).any(|window| window == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{assemble, contains_sequence, lines};
    use super::*;
    use crate::analyzer::analyze;
    use crate::ast::{Block, Declaration, Expr, ExprKind, Identifier, Statement, StatementKind};
    use crate::lexer::tokenize;
    use crate::parser::parse;

    #[test]
    fn test_program_header() {
        let asm = assemble("principal() { }");
        let lines = lines(&asm);
        assert_eq!(
            &lines[..5],
            [".data", "newline:", ".asciiz \"\\n\"", ".text", ".globl main"]
        );
    }

    #[test]
    fn test_main_exits() {
        let asm = assemble("principal() { }");
        assert!(contains_sequence(&asm, &["main:", "move $fp, $sp"]));
        assert!(contains_sequence(&asm, &["li $v0, 10", "syscall"]));
    }

    #[test]
    fn test_globals_become_data_words() {
        let asm = assemble("int total; car c; principal() { total = 1; }");
        assert!(contains_sequence(&asm, &["glob_total:", ".word 0"]));
        assert!(contains_sequence(&asm, &["glob_c:", ".word 0"]));
        assert!(asm.contains("la $t0, glob_total"));
    }

    #[test]
    fn test_duplicate_global_emitted_once() {
        let asm = assemble("int g; int g; principal() { g = 1; }");
        assert_eq!(asm.matches("glob_g:").count(), 1);
    }

    #[test]
    fn test_comments_toggle() {
        let tokens = tokenize("principal() { escreva 1; }").unwrap();
        let mut program = parse(&tokens).unwrap();
        let analysis = analyze(&mut program);

        let with = generate(&program, &analysis.symbols, GeneratorOptions::default()).unwrap();
        let without = generate(
            &program,
            &analysis.symbols,
            GeneratorOptions {
                emit_comments: false,
            },
        )
        .unwrap();

        assert!(with.contains('#'));
        assert!(!without.contains('#'));
    }

    #[test]
    fn test_unanalyzed_identifier_is_internal_fault() {
        let span = Span::at_line(3);
        let body = Block::new(
            Vec::new(),
            vec![Statement::new(
                StatementKind::Write(Expr::new(
                    ExprKind::Identifier(Identifier::new("x")),
                    span,
                )),
                span,
            )],
            span,
        );
        let program = Program::new(Vec::<Declaration>::new(), body, span);
        let symbols = SymbolArena::new();

        let error = generate(&program, &symbols, GeneratorOptions::default()).unwrap_err();
        assert_eq!(error.code, ErrorCode::UnresolvedSymbol);
        assert!(error.code.is_internal());
        assert_eq!(error.line(), 3);
    }
}
