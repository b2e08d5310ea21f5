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

//! Goianinha Compiler CLI
//!
//! Compiles a Goianinha source file into MIPS assembly.

use clap::Parser;
use log::{debug, warn, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

use goianinha::error::{format_error, format_warning};
use goianinha::output::{has_assembly_extension, write_assembly, DEFAULT_OUTPUT};
use goianinha::CompileOptions;

/// Goianinha - A compiler for a small imperative teaching language
#[derive(Parser, Debug)]
#[command(name = "goianinha")]
#[command(version)]
#[command(about = "Compiles Goianinha programs into MIPS assembly")]
#[command(long_about = r#"
Goianinha compiles source files written in a small imperative language
with Portuguese keywords into MIPS32 assembly that runs on the SPIM and
MARS simulators.

Example usage:
  goianinha fatorial.gyn
  goianinha fatorial.gyn -o fatorial.s
  goianinha fatorial.gyn --check

Exit codes:
  0  success
  1  compile errors
  2  usage errors
  3  I/O errors
"#)]
struct Cli {
    /// Source file to compile
    source_file: PathBuf,

    /// Output assembly file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Only check the program; do not write assembly
    #[arg(long)]
    check: bool,

    /// Do not annotate the assembly with comments
    #[arg(long)]
    no_comments: bool,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("Goianinha Compiler v{}", goianinha::VERSION);

    let source = match std::fs::read_to_string(&cli.source_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", cli.source_file.display(), e);
            return ExitCode::from(3);
        }
    };

    let filename = cli
        .source_file
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>");

    if cli.check {
        return match goianinha::check(&source) {
            Ok(warnings) => {
                for warning in &warnings {
                    eprint!("{}", format_warning(warning, &source, Some(filename)));
                }
                println!("{}: no errors", filename);
                ExitCode::SUCCESS
            }
            Err(failure) => {
                report_failure(&failure, &source, filename);
                ExitCode::from(1)
            }
        };
    }

    let options = CompileOptions {
        emit_comments: !cli.no_comments,
    };

    let output = match goianinha::compile_with_warnings(&source, &options) {
        Ok(output) => output,
        Err(failure) => {
            report_failure(&failure, &source, filename);
            return ExitCode::from(1);
        }
    };

    // Warnings don't prevent compilation
    for warning in &output.warnings {
        eprint!("{}", format_warning(warning, &source, Some(filename)));
    }

    if !has_assembly_extension(&cli.output) {
        warn!(
            "output file {} does not have a .s or .asm extension",
            cli.output.display()
        );
    }

    if let Err(e) = write_assembly(&output.assembly, &cli.output) {
        eprintln!("Error: Cannot write {}: {}", cli.output.display(), e);
        return ExitCode::from(3);
    }

    println!("Compiled {} -> {}", filename, cli.output.display());
    ExitCode::SUCCESS
}

/// Print every warning and error of a failed compilation.
fn report_failure(failure: &goianinha::CompileFailure, source: &str, filename: &str) {
    for warning in &failure.warnings {
        eprint!("{}", format_warning(warning, source, Some(filename)));
    }
    for error in &failure.errors {
        eprint!("{}", format_error(error, source, Some(filename)));
    }
    eprintln!("{}: {}", filename, failure);
}
