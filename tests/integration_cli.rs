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

//! End-to-end CLI integration tests.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const HELLO: &str = r#"principal() { escreva "Ola"; novalinha; }"#;

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_goianinha"))
}

/// Write `source` to `name` inside a fresh temporary directory.
fn source_file(name: &str, source: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, source).expect("Failed to write source");
    (dir, path)
}

fn run_in(dir: &Path, args: &[&std::ffi::OsStr]) -> Output {
    cargo_bin()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test --help flag.
#[test]
fn test_help_flag() {
    let output = cargo_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Goianinha") || stdout.contains("goianinha"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--verbose"));
    assert!(stdout.contains("--check"));
    assert!(stdout.contains("--no-comments"));
}

/// Test --version flag.
#[test]
fn test_version_flag() {
    let output = cargo_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("goianinha"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

/// Test compiling with an explicit output path.
#[test]
fn test_compile_with_output_flag() {
    let (dir, source) = source_file("ola.gyn", HELLO);
    let target = dir.path().join("ola.s");

    let output = run_in(
        dir.path(),
        &[source.as_os_str(), "-o".as_ref(), target.as_os_str()],
    );

    assert!(
        output.status.success(),
        "Compilation failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let assembly = std::fs::read_to_string(&target).expect("Output file not created");
    assert!(assembly.trim_start().starts_with(".data"));
    assert!(assembly.contains(".asciiz \"Ola\""));
    assert!(assembly.contains("main:"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Compiled ola.gyn"));
}

/// Without -o the assembly goes to saida.s in the working directory.
#[test]
fn test_default_output_file() {
    let (dir, source) = source_file("ola.gyn", HELLO);

    let output = run_in(dir.path(), &[source.as_os_str()]);

    assert!(output.status.success());
    assert!(dir.path().join("saida.s").exists(), "saida.s not created");
}

/// Comments are emitted by default and suppressed with --no-comments.
#[test]
fn test_no_comments_flag() {
    let (dir, source) = source_file("ola.gyn", HELLO);
    let commented = dir.path().join("com.s");
    let plain = dir.path().join("sem.s");

    run_in(dir.path(), &[source.as_os_str(), "-o".as_ref(), commented.as_os_str()]);
    run_in(
        dir.path(),
        &[
            source.as_os_str(),
            "-o".as_ref(),
            plain.as_os_str(),
            "--no-comments".as_ref(),
        ],
    );

    let commented = std::fs::read_to_string(commented).unwrap();
    let plain = std::fs::read_to_string(plain).unwrap();
    assert!(commented.contains('#'));
    assert!(!plain.contains('#'));
}

/// --check validates without writing any file.
#[test]
fn test_check_flag() {
    let (dir, source) = source_file("ola.gyn", HELLO);

    let output = run_in(dir.path(), &[source.as_os_str(), "--check".as_ref()]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("ola.gyn: no errors"));
    assert!(!dir.path().join("saida.s").exists());
}

/// --check still reports errors and fails.
#[test]
fn test_check_flag_with_errors() {
    let (dir, source) = source_file("erro.gyn", "principal() { x = 1; }");

    let output = run_in(dir.path(), &[source.as_os_str(), "--check".as_ref()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error[E200]"));
}

/// Test that a missing source file is an I/O error.
#[test]
fn test_missing_source_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nao_existe.gyn");

    let output = run_in(dir.path(), &[missing.as_os_str()]);

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot read"));
}

/// Test that a missing argument is a usage error.
#[test]
fn test_missing_source_argument() {
    let output = cargo_bin().output().expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

/// Test lexical error reporting.
#[test]
fn test_lexical_error_reporting() {
    let (dir, source) = source_file("lexico.gyn", "principal() { escreva 1 # 2; }");

    let output = run_in(dir.path(), &[source.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E001]"), "{}", stderr);
    assert!(stderr.contains("lexico.gyn:1"), "{}", stderr);
    assert!(!dir.path().join("saida.s").exists());
}

/// Test syntax error reporting.
#[test]
fn test_syntax_error_reporting() {
    let (dir, source) = source_file("sintaxe.gyn", "principal() {\n    escreva 1\n}\n");

    let output = run_in(dir.path(), &[source.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E1"), "{}", stderr);
}

/// Every semantic error is reported, not only the first.
#[test]
fn test_semantic_errors_all_reported() {
    let source = "principal() {\n    a = 1;\n    b = 2;\n    c = 3;\n}\n";
    let (dir, path) = source_file("semantica.gyn", source);

    let output = run_in(dir.path(), &[path.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("error[E200]").count(), 3, "{}", stderr);
    assert!(stderr.contains("3 error(s)"), "{}", stderr);
}

/// Warnings are printed but do not fail the build.
#[test]
fn test_warnings_do_not_fail() {
    let (dir, source) = source_file("aviso.gyn", "principal() { int x; int x; x = 1; }");

    let output = run_in(dir.path(), &[source.as_os_str()]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("warning[E201]"));
    assert!(dir.path().join("saida.s").exists());
}

/// An unwritable output path is an I/O error.
#[test]
fn test_unwritable_output() {
    let (dir, source) = source_file("ola.gyn", HELLO);
    let target = dir.path().join("nao").join("existe").join("saida.s");

    let output = run_in(dir.path(), &[source.as_os_str(), "-o".as_ref(), target.as_os_str()]);

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot write"));
}

/// Verbose mode turns on debug logging.
#[test]
fn test_verbose_output() {
    let (dir, source) = source_file("ola.gyn", HELLO);

    let output = cargo_bin()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg(&source)
        .arg("--verbose")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"), "{}", stderr);
    assert!(stderr.contains("Goianinha Compiler v"), "{}", stderr);
}

/// A non-assembly extension is accepted with a warning.
#[test]
fn test_unusual_output_extension() {
    let (dir, source) = source_file("ola.gyn", HELLO);
    let target = dir.path().join("ola.txt");

    let output = cargo_bin()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg(&source)
        .arg("-o")
        .arg(&target)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(target.exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not have a .s or .asm extension"));
}

/// The fixture programs all compile through the binary.
#[test]
fn test_compile_fixtures() {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let dir = tempfile::tempdir().unwrap();

    for entry in std::fs::read_dir(fixtures).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|e| e.to_str()) != Some("gyn") {
            continue;
        }
        let target = dir.path().join("fixture.s");
        let output = run_in(dir.path(), &[path.as_os_str(), "-o".as_ref(), target.as_os_str()]);
        assert!(
            output.status.success(),
            "{} failed: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
