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

//! Symbol table for the semantic analyzer.
//!
//! The symbol table manages a stack of scopes, supporting nested lexical
//! scopes for the program, functions and blocks. It owns the symbol arena;
//! popping a scope only forgets names, never symbols.

use super::scope::Scope;
use super::symbol::{ParamDescriptor, Symbol, SymbolArena, SymbolId, SymbolKind};
use crate::ast::DataType;
use crate::error::Span;
use log::debug;

/// The symbol table for semantic analysis.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// Every symbol declared so far.
    arena: SymbolArena,
    /// The scope stack (innermost scope last).
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// Create a new symbol table with no open scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new scope onto the stack.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
        debug!("push scope (depth {})", self.scopes.len());
    }

    /// Pop the current scope from the stack.
    pub fn pop_scope(&mut self) {
        if let Some(scope) = self.scopes.pop() {
            debug!(
                "pop scope (depth {}, {} names)",
                self.scopes.len() + 1,
                scope.len()
            );
        }
    }

    fn top(&mut self) -> &mut Scope {
        if self.scopes.is_empty() {
            self.scopes.push(Scope::new());
        }
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Declare a symbol in the current scope.
    ///
    /// A symbol of the same kind (function or not) already declared with
    /// this name in the current scope wins: it is returned as `Err` and
    /// nothing is inserted.
    fn declare(&mut self, symbol: Symbol) -> Result<SymbolId, SymbolId> {
        let is_function = symbol.is_function();
        let existing = self
            .scopes
            .last()
            .and_then(|scope| scope.lookup_kind(&symbol.name, is_function, &self.arena));

        if let Some(existing) = existing {
            debug!("duplicate declaration of '{}' ignored", symbol.name);
            return Err(existing);
        }

        let name = symbol.name.clone();
        let id = self.arena.alloc(symbol);
        self.top().insert(name.as_str(), id);
        debug!(
            "declare '{}' as {} at depth {}",
            name,
            id,
            self.scopes.len()
        );
        Ok(id)
    }

    /// Declare a variable in the current scope. Locals use position `-1`.
    pub fn insert_variable(
        &mut self,
        name: &str,
        var_type: DataType,
        position: i32,
        span: Span,
    ) -> Result<SymbolId, SymbolId> {
        self.declare(Symbol::variable(name, var_type, position, span))
    }

    /// Declare a parameter with its 0-based index in the current scope.
    pub fn insert_parameter(
        &mut self,
        name: &str,
        param_type: DataType,
        index: usize,
        span: Span,
    ) -> Result<SymbolId, SymbolId> {
        let position = i32::try_from(index).unwrap_or(i32::MAX);
        self.insert_variable(name, param_type, position, span)
    }

    /// Declare a function in the current scope.
    pub fn insert_function(
        &mut self,
        name: &str,
        return_type: DataType,
        arity: usize,
        span: Span,
    ) -> Result<SymbolId, SymbolId> {
        self.declare(Symbol::function(name, return_type, arity, span))
    }

    /// Append a parameter descriptor to a function symbol.
    pub fn add_parameter_descriptor(&mut self, function: SymbolId, name: &str, param_type: DataType) {
        if let Some(Symbol {
            kind: SymbolKind::Function { params, .. },
            ..
        }) = self.arena.get_mut(function)
        {
            params.push(ParamDescriptor {
                name: name.to_string(),
                param_type,
            });
        }
    }

    /// Look up a symbol, searching from innermost to outermost scope.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }

    /// Get a symbol by handle.
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.arena.get(id)
    }

    /// Resolve a name straight to its symbol.
    pub fn resolve(&self, name: &str) -> Option<(SymbolId, &Symbol)> {
        let id = self.lookup(name)?;
        self.arena.get(id).map(|symbol| (id, symbol))
    }

    /// Borrow the arena.
    pub fn arena(&self) -> &SymbolArena {
        &self.arena
    }

    /// Give up the scope stack and keep the symbols.
    pub fn into_arena(self) -> SymbolArena {
        self.arena
    }
}
