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

//! Label management for code generation.
//!
//! Control-flow and string labels are numbered by counters that only ever
//! grow during one compilation. Function, return and global labels are
//! derived from source names, which the analyzer already made unique.

use super::CodeGenerator;

/// Extension trait for label creation.
pub trait LabelManager {
    /// Labels `(else, end)` for the next `se`.
    fn next_if_labels(&mut self) -> (String, String);

    /// Labels `(start, end)` for the next `enquanto`.
    fn next_while_labels(&mut self) -> (String, String);

    /// Label for the next string constant.
    fn next_string_label(&mut self) -> String;
}

impl LabelManager for CodeGenerator<'_> {
    fn next_if_labels(&mut self) -> (String, String) {
        let n = self.if_counter;
        self.if_counter += 1;
        (format!("if_else_{}", n), format!("if_end_{}", n))
    }

    fn next_while_labels(&mut self) -> (String, String) {
        let n = self.while_counter;
        self.while_counter += 1;
        (format!("while_start_{}", n), format!("while_end_{}", n))
    }

    fn next_string_label(&mut self) -> String {
        let n = self.string_counter;
        self.string_counter += 1;
        format!("str_{}", n)
    }
}

/// Entry label of a function.
pub fn function_label(name: &str) -> String {
    format!("func_{}", name)
}

/// Label of a function's epilogue.
pub fn return_label(name: &str) -> String {
    format!("ret_{}", name)
}

/// Label of a global variable's storage word.
pub fn global_label(name: &str) -> String {
    format!("glob_{}", name)
}
