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

//! Analysis context for the semantic analyzer.
//!
//! This module defines the context used during semantic analysis to track
//! the function whose body is being analyzed.

use super::symbol::SymbolId;
use crate::ast::DataType;

/// Context for semantic analysis.
///
/// Tracks whether we're inside a function, its expected return type and
/// its symbol.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    /// The current function name (for error messages).
    pub function_name: Option<String>,
    /// The expected return type of the current function.
    pub return_type: Option<DataType>,
    /// The current function's symbol.
    pub function_symbol: Option<SymbolId>,
}

impl AnalysisContext {
    /// Create a context for the body of a function.
    pub fn for_function(name: &str, return_type: DataType, symbol: Option<SymbolId>) -> Self {
        Self {
            function_name: Some(name.to_string()),
            return_type: Some(return_type),
            function_symbol: symbol,
        }
    }

    /// Check if we're inside a function body.
    pub fn in_function(&self) -> bool {
        self.return_type.is_some()
    }
}
