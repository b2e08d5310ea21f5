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

//! Symbol definitions for the semantic analyzer.
//!
//! Every symbol created during analysis lives in a [`SymbolArena`] owned by
//! the whole compilation unit. Scopes and AST nodes refer to symbols through
//! [`SymbolId`] handles, so symbol data outlives the scope that declared it
//! and stays readable by code generation.

use crate::ast::DataType;
use crate::error::Span;
use std::num::NonZeroU32;

/// Handle to a symbol stored in a [`SymbolArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(NonZeroU32);

impl SymbolId {
    fn from_index(index: usize) -> Self {
        let offset = u32::try_from(index).unwrap_or(u32::MAX - 1);
        Self(NonZeroU32::MIN.saturating_add(offset))
    }

    /// Zero-based index into the arena.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name and type of one declared parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    pub name: String,
    pub param_type: DataType,
}

/// What a symbol names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    /// A variable or parameter.
    Variable {
        var_type: DataType,
        /// Parameter index, or `-1` for locals and globals.
        position: i32,
    },
    /// A function.
    Function {
        return_type: DataType,
        arity: usize,
        params: Vec<ParamDescriptor>,
    },
}

/// Symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The symbol name.
    pub name: String,
    /// Variable or function data.
    pub kind: SymbolKind,
    /// The span where this symbol was declared.
    pub span: Span,
}

impl Symbol {
    /// Create a new variable symbol. Parameters have a non-negative position.
    pub fn variable(name: impl Into<String>, var_type: DataType, position: i32, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Variable { var_type, position },
            span,
        }
    }

    /// Create a new function symbol with an empty parameter list.
    pub fn function(name: impl Into<String>, return_type: DataType, arity: usize, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Function {
                return_type,
                arity,
                params: Vec::with_capacity(arity),
            },
            span,
        }
    }

    /// Check if this is a function symbol.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function { .. })
    }

    /// Check if this is a parameter.
    pub fn is_parameter(&self) -> bool {
        matches!(self.kind, SymbolKind::Variable { position, .. } if position >= 0)
    }

    /// Variable type, or return type for functions.
    pub fn data_type(&self) -> DataType {
        match &self.kind {
            SymbolKind::Variable { var_type, .. } => *var_type,
            SymbolKind::Function { return_type, .. } => *return_type,
        }
    }

    /// Declared position of a variable.
    pub fn position(&self) -> Option<i32> {
        match &self.kind {
            SymbolKind::Variable { position, .. } => Some(*position),
            SymbolKind::Function { .. } => None,
        }
    }

    /// Parameter descriptors of a function.
    pub fn params(&self) -> &[ParamDescriptor] {
        match &self.kind {
            SymbolKind::Function { params, .. } => params,
            SymbolKind::Variable { .. } => &[],
        }
    }
}

/// Owner of every symbol of one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a symbol and return its handle.
    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId::from_index(self.symbols.len());
        self.symbols.push(symbol);
        id
    }

    /// Get a symbol by handle.
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    /// Get a symbol by handle (mutable).
    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.index())
    }

    /// Number of symbols created.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if no symbol was created.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over all symbols with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (SymbolId::from_index(index), symbol))
    }
}
