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

//! Goianinha Compiler Library
//!
//! This library compiles programs written in Goianinha, a small imperative
//! teaching language with Portuguese keywords, into MIPS32 assembly for the
//! SPIM and MARS simulators.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - Parsing tokens into an AST
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`analyzer`] - Scopes, symbol resolution and type checking
//! - [`codegen`] - MIPS assembly generation
//! - [`output`] - Writing `.s` files
//!
//! # Example
//!
//! ```no_run
//! use goianinha::{analyzer, codegen, lexer, output, parser};
//! use std::path::Path;
//!
//! fn build(source: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let tokens = lexer::tokenize(source)?;
//!     let mut program = parser::parse(&tokens)?;
//!
//!     let analysis = analyzer::analyze(&mut program);
//!     if let Some(error) = analysis.errors.into_iter().next() {
//!         return Err(error.into());
//!     }
//!
//!     let assembly = codegen::generate(&program, &analysis.symbols, Default::default())?;
//!     output::write_assembly(&assembly, Path::new("saida.s"))?;
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod ast;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use analyzer::Analysis;
pub use ast::{DataType, Program};
pub use error::{format_error, format_warning, CompileError, CompileFailure, ErrorCode, Result, Span};
pub use lexer::Token;

use codegen::GeneratorOptions;
use log::info;

/// The version of the Goianinha compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "Goianinha";

/// Options for a compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Annotate the assembly with `#` comments.
    pub emit_comments: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            emit_comments: true,
        }
    }
}

/// A successful compilation.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The generated MIPS assembly.
    pub assembly: String,
    /// Warnings found during analysis.
    pub warnings: Vec<CompileError>,
}

/// Compile source code to MIPS assembly with default options.
///
/// # Example
///
/// ```no_run
/// let source = r#"
/// principal() {
///     escreva "Ola, mundo!";
///     novalinha;
/// }
/// "#;
///
/// match goianinha::compile(source) {
///     Ok(assembly) => print!("{}", assembly),
///     Err(failure) => eprintln!("{}", failure),
/// }
/// ```
pub fn compile(source: &str) -> std::result::Result<String, CompileFailure> {
    compile_with_options(source, &CompileOptions::default())
}

/// Compile source code to MIPS assembly.
pub fn compile_with_options(
    source: &str,
    options: &CompileOptions,
) -> std::result::Result<String, CompileFailure> {
    compile_with_warnings(source, options).map(|output| output.assembly)
}

/// Compile source code, returning the assembly together with any warnings.
pub fn compile_with_warnings(
    source: &str,
    options: &CompileOptions,
) -> std::result::Result<CompileOutput, CompileFailure> {
    let (program, analysis) = analyze_source(source)?;

    let assembly = codegen::generate(
        &program,
        &analysis.symbols,
        GeneratorOptions {
            emit_comments: options.emit_comments,
        },
    )
    .map_err(|error| CompileFailure {
        errors: vec![error],
        warnings: analysis.warnings.clone(),
    })?;

    info!("generated {} lines of assembly", assembly.lines().count());
    Ok(CompileOutput {
        assembly,
        warnings: analysis.warnings,
    })
}

/// Run the front end and semantic analysis only.
///
/// Returns the warnings when the program is valid.
pub fn check(source: &str) -> std::result::Result<Vec<CompileError>, CompileFailure> {
    analyze_source(source).map(|(_, analysis)| analysis.warnings)
}

/// Lex, parse and analyze `source`, failing if any error was found.
fn analyze_source(source: &str) -> std::result::Result<(Program, Analysis), CompileFailure> {
    let tokens = lexer::tokenize(source)?;
    let mut program = parser::parse(&tokens)?;

    let analysis = analyzer::analyze(&mut program);
    if !analysis.is_ok() {
        return Err(CompileFailure {
            errors: analysis.errors,
            warnings: analysis.warnings,
        });
    }
    Ok((program, analysis))
}
