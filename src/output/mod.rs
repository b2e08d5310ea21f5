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

//! Output module for the Goianinha compiler.
//!
//! Writes generated assembly to disk as a `.s` file that SPIM or MARS
//! can load.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "saida.s";

/// Write assembly text to `path`, replacing any existing file.
pub fn write_assembly(assembly: &str, path: &Path) -> io::Result<()> {
    debug!("writing {} bytes to {}", assembly.len(), path.display());
    fs::write(path, assembly)
}

/// Check whether `path` has an extension assemblers expect.
pub fn has_assembly_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "s" | "asm"))
}
