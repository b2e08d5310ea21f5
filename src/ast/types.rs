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

//! Type definitions for the Goianinha compiler.

/// A data type in the Goianinha language.
///
/// `Void` is both the return type of procedures and the type given to
/// expressions that failed to check, so later rules can skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// 32-bit signed integer.
    Int,
    /// Single character.
    Char,
    /// No value.
    #[default]
    Void,
}

impl DataType {
    /// Check if this type carries a value.
    pub fn is_value(&self) -> bool {
        !matches!(self, DataType::Void)
    }

    /// Check if this is the integer type.
    pub fn is_int(&self) -> bool {
        matches!(self, DataType::Int)
    }

    /// Size of a value of this type in a stack slot.
    pub fn size(&self) -> i32 {
        match self {
            DataType::Int | DataType::Char => 4,
            DataType::Void => 0,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::Char => write!(f, "car"),
            DataType::Void => write!(f, "void"),
        }
    }
}
