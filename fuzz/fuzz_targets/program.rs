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

//! Structured Goianinha programs for the fuzz targets.
//!
//! `arbitrary` builds a small syntax tree that always follows the grammar,
//! so the fuzzer spends its time inside the analyzer and generator instead
//! of bouncing off the first syntax error.

use arbitrary::Arbitrary;
use std::fmt::Write;

/// Nesting deeper than this renders as a literal.
const MAX_DEPTH: usize = 6;

#[derive(Debug, Arbitrary)]
pub enum Type {
    Int,
    Car,
}

/// A small pool of names so that lookups, shadowing and redeclarations
/// collide often.
#[derive(Debug, Arbitrary)]
pub enum Name {
    A,
    B,
    C,
    F,
    G,
}

#[derive(Debug, Arbitrary)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
}

#[derive(Debug, Arbitrary)]
pub enum Expr {
    Int(u16),
    Char(u8),
    Var(Name),
    Neg(Box<Expr>),
    Not(Box<Expr>),
    Binary(Box<Expr>, BinOp, Box<Expr>),
    Assign(Name, Box<Expr>),
    Call(Name, Vec<Expr>),
}

#[derive(Debug, Arbitrary)]
pub enum Stmt {
    Empty,
    Expr(Expr),
    Write(Expr),
    WriteText(String),
    NewLine,
    Read(Name),
    Return(Option<Expr>),
    If(Expr, Box<Stmt>, Option<Box<Stmt>>),
    While(Expr, Box<Stmt>),
    Block(Block),
}

#[derive(Debug, Arbitrary)]
pub struct Block {
    pub locals: Vec<(Type, Name)>,
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Arbitrary)]
pub struct Function {
    /// `None` is `void`.
    pub return_type: Option<Type>,
    pub name: Name,
    pub params: Vec<(Type, Name)>,
    pub body: Block,
}

#[derive(Debug, Arbitrary)]
pub struct Program {
    pub globals: Vec<(Type, Name)>,
    pub functions: Vec<Function>,
    pub body: Block,
}

impl Type {
    fn keyword(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Car => "car",
        }
    }
}

impl Name {
    fn as_str(&self) -> &'static str {
        match self {
            Name::A => "a",
            Name::B => "b",
            Name::C => "c",
            Name::F => "f",
            Name::G => "g",
        }
    }
}

impl BinOp {
    fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

impl Expr {
    fn render(&self, out: &mut String, depth: usize) {
        if depth > MAX_DEPTH {
            out.push('0');
            return;
        }
        match self {
            Expr::Int(n) => {
                let _ = write!(out, "{}", n);
            }
            Expr::Char(c) => {
                let _ = write!(out, "'{}'", (b'a' + c % 26) as char);
            }
            Expr::Var(name) => out.push_str(name.as_str()),
            Expr::Neg(inner) | Expr::Not(inner) => {
                out.push_str(if matches!(self, Expr::Neg(_)) { "(-" } else { "(!" });
                inner.render(out, depth + 1);
                out.push(')');
            }
            Expr::Binary(left, op, right) => {
                out.push('(');
                left.render(out, depth + 1);
                let _ = write!(out, " {} ", op.symbol());
                right.render(out, depth + 1);
                out.push(')');
            }
            Expr::Assign(name, value) => {
                let _ = write!(out, "({} = ", name.as_str());
                value.render(out, depth + 1);
                out.push(')');
            }
            Expr::Call(name, args) => {
                let _ = write!(out, "{}(", name.as_str());
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    arg.render(out, depth + 1);
                }
                out.push(')');
            }
        }
    }
}

impl Stmt {
    fn render(&self, out: &mut String, depth: usize) {
        if depth > MAX_DEPTH {
            out.push_str(";\n");
            return;
        }
        match self {
            Stmt::Empty => out.push_str(";\n"),
            Stmt::Expr(expr) => {
                expr.render(out, depth);
                out.push_str(";\n");
            }
            Stmt::Write(expr) => {
                out.push_str("escreva ");
                expr.render(out, depth);
                out.push_str(";\n");
            }
            Stmt::WriteText(text) => {
                let text: String = text.chars().filter(|c| *c != '"' && *c != '\n').collect();
                let _ = writeln!(out, "escreva \"{}\";", text);
            }
            Stmt::NewLine => out.push_str("novalinha;\n"),
            Stmt::Read(name) => {
                let _ = writeln!(out, "leia {};", name.as_str());
            }
            Stmt::Return(value) => {
                out.push_str("retorne");
                if let Some(value) = value {
                    out.push(' ');
                    value.render(out, depth);
                }
                out.push_str(";\n");
            }
            Stmt::If(condition, then_branch, else_branch) => {
                out.push_str("se (");
                condition.render(out, depth);
                out.push_str(") entao ");
                then_branch.render(out, depth + 1);
                if let Some(else_branch) = else_branch {
                    out.push_str("senao ");
                    else_branch.render(out, depth + 1);
                }
            }
            Stmt::While(condition, body) => {
                out.push_str("enquanto (");
                condition.render(out, depth);
                out.push_str(") execute ");
                body.render(out, depth + 1);
            }
            Stmt::Block(block) => block.render(out, depth + 1),
        }
    }
}

impl Block {
    fn render(&self, out: &mut String, depth: usize) {
        out.push_str("{\n");
        for (ty, name) in &self.locals {
            let _ = writeln!(out, "{} {};", ty.keyword(), name.as_str());
        }
        for stmt in &self.statements {
            stmt.render(out, depth);
        }
        out.push_str("}\n");
    }
}

impl Program {
    /// Render as Goianinha source text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (ty, name) in &self.globals {
            let _ = writeln!(out, "{} {};", ty.keyword(), name.as_str());
        }
        for func in &self.functions {
            let return_type = func.return_type.as_ref().map_or("void", Type::keyword);
            let params: Vec<String> = func
                .params
                .iter()
                .map(|(ty, name)| format!("{} {}", ty.keyword(), name.as_str()))
                .collect();
            let _ = write!(
                out,
                "funcao {} {}({}) ",
                return_type,
                func.name.as_str(),
                params.join(", ")
            );
            func.body.render(&mut out, 0);
        }
        out.push_str("principal() ");
        self.body.render(&mut out, 0);
        out
    }
}
