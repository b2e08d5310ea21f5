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

//! Scope management for the semantic analyzer.
//!
//! A scope represents a lexical region where symbols are declared. It only
//! holds lookup structure; the symbols themselves live in the arena.

use super::symbol::{SymbolArena, SymbolId};

/// A scope in the symbol table.
#[derive(Debug, Default)]
pub struct Scope {
    /// Declared names in insertion order.
    entries: Vec<(String, SymbolId)>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declared name.
    pub fn insert(&mut self, name: impl Into<String>, id: SymbolId) {
        self.entries.push((name.into(), id));
    }

    /// Look up the most recently declared symbol with this name.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.entries
            .iter()
            .rev()
            .find(|(entry, _)| entry == name)
            .map(|(_, id)| *id)
    }

    /// Look up a symbol of the same kind (function or not) with this name.
    pub fn lookup_kind(&self, name: &str, function: bool, arena: &SymbolArena) -> Option<SymbolId> {
        self.entries
            .iter()
            .rev()
            .filter(|(entry, _)| entry == name)
            .map(|(_, id)| *id)
            .find(|id| arena.get(*id).is_some_and(|s| s.is_function() == function))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was declared here.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SymbolId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }
}
