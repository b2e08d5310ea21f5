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

//! Shared helpers for the integration tests.
//!
//! Contains a small interpreter for the MIPS subset the compiler emits,
//! so tests can check what a program prints instead of how its assembly
//! looks.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

const DATA_BASE: u32 = 0x1001_0000;
const STACK_TOP: u32 = 0x7fff_effc;
const STEP_LIMIT: usize = 5_000_000;

/// One parsed instruction.
#[derive(Debug, Clone)]
struct Instruction {
    mnemonic: String,
    operands: Vec<String>,
    line: usize,
}

/// A loaded program ready to run.
#[derive(Debug, Default)]
pub struct Machine {
    text: Vec<Instruction>,
    text_labels: HashMap<String, usize>,
    data_labels: HashMap<String, u32>,
    memory: HashMap<u32, u8>,
    registers: HashMap<String, i32>,
    hi: i32,
    lo: i32,
    input: VecDeque<i32>,
    output: String,
    steps: usize,
}

impl Machine {
    /// Assemble `source` into a machine.
    pub fn load(source: &str) -> Result<Self, String> {
        let mut machine = Machine::default();
        let mut in_data = false;
        let mut data_pointer = DATA_BASE;
        let mut pending_data_labels: Vec<String> = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            let line_no = index + 1;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(label) = line.strip_suffix(':') {
                if label.contains(char::is_whitespace) {
                    return Err(format!("line {}: malformed label '{}'", line_no, line));
                }
                let taken = machine.text_labels.contains_key(label)
                    || machine.data_labels.contains_key(label)
                    || pending_data_labels.iter().any(|l| l == label);
                if taken {
                    return Err(format!("line {}: duplicate label '{}'", line_no, label));
                }
                if in_data {
                    pending_data_labels.push(label.to_string());
                } else {
                    machine
                        .text_labels
                        .insert(label.to_string(), machine.text.len());
                }
                continue;
            }

            let (mnemonic, rest) = match line.split_once(char::is_whitespace) {
                Some((m, r)) => (m, r.trim()),
                None => (line, ""),
            };

            match mnemonic {
                ".data" => in_data = true,
                ".text" => in_data = false,
                ".globl" => {}
                ".asciiz" => {
                    let bytes = parse_string_literal(rest)
                        .ok_or_else(|| format!("line {}: bad string {}", line_no, rest))?;
                    for label in pending_data_labels.drain(..) {
                        machine.data_labels.insert(label, data_pointer);
                    }
                    for byte in bytes {
                        machine.memory.insert(data_pointer, byte);
                        data_pointer += 1;
                    }
                    machine.memory.insert(data_pointer, 0);
                    data_pointer += 1;
                }
                ".word" => {
                    let value: i32 = rest
                        .parse()
                        .map_err(|_| format!("line {}: bad word {}", line_no, rest))?;
                    data_pointer = (data_pointer + 3) & !3;
                    for label in pending_data_labels.drain(..) {
                        machine.data_labels.insert(label, data_pointer);
                    }
                    machine.store_word(data_pointer, value)?;
                    data_pointer += 4;
                }
                _ if mnemonic.starts_with('.') => {
                    return Err(format!("line {}: unknown directive {}", line_no, mnemonic));
                }
                _ => {
                    if in_data {
                        return Err(format!("line {}: instruction in .data", line_no));
                    }
                    let operands = if rest.is_empty() {
                        Vec::new()
                    } else {
                        rest.split(',').map(|op| op.trim().to_string()).collect()
                    };
                    machine.text.push(Instruction {
                        mnemonic: mnemonic.to_string(),
                        operands,
                        line: line_no,
                    });
                }
            }
        }

        if !pending_data_labels.is_empty() {
            return Err(format!("data labels without data: {:?}", pending_data_labels));
        }
        Ok(machine)
    }

    /// Queue integers for `leia`.
    pub fn with_input(mut self, input: &[i32]) -> Self {
        self.input = input.iter().copied().collect();
        self
    }

    /// Run from `main` until the exit system call.
    pub fn run(&mut self) -> Result<String, String> {
        let mut pc = *self
            .text_labels
            .get("main")
            .ok_or_else(|| "no 'main' label".to_string())?;
        self.registers.insert("$sp".into(), STACK_TOP as i32);

        loop {
            self.steps += 1;
            if self.steps > STEP_LIMIT {
                return Err("step limit exceeded".into());
            }
            let instruction = self
                .text
                .get(pc)
                .cloned()
                .ok_or_else(|| format!("fell off the end of .text at {}", pc))?;
            match self.execute(&instruction, pc) {
                Ok(Some(next)) => pc = next,
                Ok(None) => return Ok(std::mem::take(&mut self.output)),
                Err(message) => {
                    return Err(format!("line {} ({}): {}", instruction.line, instruction.mnemonic, message))
                }
            }
        }
    }

    /// Current value of the stack pointer.
    pub fn stack_pointer(&self) -> i32 {
        self.reg("$sp")
    }

    /// Execute one instruction; `None` means the program exited.
    fn execute(&mut self, ins: &Instruction, pc: usize) -> Result<Option<usize>, String> {
        let ops = &ins.operands;
        let arity = |n: usize| -> Result<(), String> {
            if ops.len() == n {
                Ok(())
            } else {
                Err(format!("expected {} operands, got {}", n, ops.len()))
            }
        };

        match ins.mnemonic.as_str() {
            "li" => {
                arity(2)?;
                let value: i64 = ops[1].parse().map_err(|_| format!("bad immediate {}", ops[1]))?;
                self.set(&ops[0], value as i32)?;
            }
            "la" => {
                arity(2)?;
                let address = *self
                    .data_labels
                    .get(&ops[1])
                    .ok_or_else(|| format!("unknown data label {}", ops[1]))?;
                self.set(&ops[0], address as i32)?;
            }
            "move" => {
                arity(2)?;
                let value = self.get(&ops[1])?;
                self.set(&ops[0], value)?;
            }
            "addiu" => {
                arity(3)?;
                let imm: i32 = ops[2].parse().map_err(|_| format!("bad immediate {}", ops[2]))?;
                let value = self.get(&ops[1])?.wrapping_add(imm);
                self.set(&ops[0], value)?;
            }
            "addu" | "subu" | "and" | "or" | "seq" | "sne" | "slt" | "sgt" | "sle" | "sge" => {
                arity(3)?;
                let a = self.get(&ops[1])?;
                let b = self.get(&ops[2])?;
                let value = match ins.mnemonic.as_str() {
                    "addu" => a.wrapping_add(b),
                    "subu" => a.wrapping_sub(b),
                    "and" => a & b,
                    "or" => a | b,
                    "seq" => (a == b) as i32,
                    "sne" => (a != b) as i32,
                    "slt" => (a < b) as i32,
                    "sgt" => (a > b) as i32,
                    "sle" => (a <= b) as i32,
                    _ => (a >= b) as i32,
                };
                self.set(&ops[0], value)?;
            }
            "mult" => {
                arity(2)?;
                let product = i64::from(self.get(&ops[0])?) * i64::from(self.get(&ops[1])?);
                self.lo = product as i32;
                self.hi = (product >> 32) as i32;
            }
            "div" => {
                arity(2)?;
                let a = self.get(&ops[0])?;
                let b = self.get(&ops[1])?;
                if b == 0 {
                    return Err("division by zero".into());
                }
                self.lo = a.wrapping_div(b);
                self.hi = a.wrapping_rem(b);
            }
            "mflo" => {
                arity(1)?;
                let lo = self.lo;
                self.set(&ops[0], lo)?;
            }
            "lw" => {
                arity(2)?;
                let address = self.effective_address(&ops[1])?;
                let value = self.load_word(address)?;
                self.set(&ops[0], value)?;
            }
            "sw" => {
                arity(2)?;
                let address = self.effective_address(&ops[1])?;
                let value = self.get(&ops[0])?;
                self.store_word(address, value)?;
            }
            "beqz" => {
                arity(2)?;
                if self.get(&ops[0])? == 0 {
                    return self.jump_target(&ops[1]).map(Some);
                }
            }
            "j" => {
                arity(1)?;
                return self.jump_target(&ops[0]).map(Some);
            }
            "jal" => {
                arity(1)?;
                self.set("$ra", (pc + 1) as i32)?;
                return self.jump_target(&ops[0]).map(Some);
            }
            "jr" => {
                arity(1)?;
                return Ok(Some(self.get(&ops[0])? as usize));
            }
            "syscall" => {
                arity(0)?;
                return self.syscall(pc);
            }
            other => return Err(format!("unsupported instruction {}", other)),
        }
        Ok(Some(pc + 1))
    }

    fn syscall(&mut self, pc: usize) -> Result<Option<usize>, String> {
        let a0 = self.reg("$a0");
        match self.reg("$v0") {
            1 => self.output.push_str(&a0.to_string()),
            4 => {
                let mut address = a0 as u32;
                loop {
                    let byte = *self
                        .memory
                        .get(&address)
                        .ok_or_else(|| format!("unterminated string at {:#x}", address))?;
                    if byte == 0 {
                        break;
                    }
                    self.output.push(byte as char);
                    address += 1;
                }
            }
            5 => {
                let value = self.input.pop_front().ok_or("read with empty input")?;
                self.set("$v0", value)?;
            }
            10 => return Ok(None),
            11 => self.output.push((a0 as u8) as char),
            other => return Err(format!("unsupported syscall {}", other)),
        }
        Ok(Some(pc + 1))
    }

    fn jump_target(&self, label: &str) -> Result<usize, String> {
        self.text_labels
            .get(label)
            .copied()
            .ok_or_else(|| format!("unknown text label {}", label))
    }

    fn effective_address(&self, operand: &str) -> Result<u32, String> {
        let (offset, rest) = operand
            .split_once('(')
            .ok_or_else(|| format!("bad memory operand {}", operand))?;
        let register = rest
            .strip_suffix(')')
            .ok_or_else(|| format!("bad memory operand {}", operand))?;
        let offset: i32 = offset.parse().map_err(|_| format!("bad offset {}", offset))?;
        let address = self.get(register)?.wrapping_add(offset) as u32;
        if address % 4 != 0 {
            return Err(format!("unaligned word access at {:#x}", address));
        }
        Ok(address)
    }

    // Memory starts zeroed, as in MARS.
    fn load_word(&self, address: u32) -> Result<i32, String> {
        let mut bytes = [0u8; 4];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.memory.get(&(address + i as u32)).copied().unwrap_or(0);
        }
        Ok(i32::from_le_bytes(bytes))
    }

    fn store_word(&mut self, address: u32, value: i32) -> Result<(), String> {
        for (i, byte) in value.to_le_bytes().into_iter().enumerate() {
            self.memory.insert(address + i as u32, byte);
        }
        Ok(())
    }

    fn reg(&self, name: &str) -> i32 {
        self.registers.get(name).copied().unwrap_or(0)
    }

    fn get(&self, name: &str) -> Result<i32, String> {
        check_register(name)?;
        Ok(self.reg(name))
    }

    fn set(&mut self, name: &str, value: i32) -> Result<(), String> {
        check_register(name)?;
        if name != "$zero" {
            self.registers.insert(name.to_string(), value);
        }
        Ok(())
    }
}

fn check_register(name: &str) -> Result<(), String> {
    const KNOWN: [&str; 8] = ["$zero", "$v0", "$a0", "$t0", "$t1", "$sp", "$fp", "$ra"];
    if KNOWN.contains(&name) {
        Ok(())
    } else {
        Err(format!("unknown register {}", name))
    }
}

/// Decode a quoted `.asciiz` operand.
fn parse_string_literal(text: &str) -> Option<Vec<u8>> {
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    let mut bytes = Vec::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            let escaped = match chars.next()? {
                'n' => '\n',
                't' => '\t',
                '0' => '\0',
                '\\' => '\\',
                '"' => '"',
                '\'' => '\'',
                _ => return None,
            };
            bytes.push(escaped as u8);
        } else {
            let mut buffer = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
        }
    }
    Some(bytes)
}

/// Compile `source` without comments, panicking on any diagnostic.
pub fn compile(source: &str) -> String {
    let options = goianinha::CompileOptions {
        emit_comments: false,
    };
    match goianinha::compile_with_options(source, &options) {
        Ok(assembly) => assembly,
        Err(failure) => panic!("compilation failed: {:?}", failure.errors),
    }
}

/// Compile and run `source`, returning everything it printed.
pub fn run(source: &str) -> String {
    run_with_input(source, &[])
}

/// Compile and run `source` with integers queued for `leia`.
pub fn run_with_input(source: &str, input: &[i32]) -> String {
    let assembly = compile(source);
    let mut machine = Machine::load(&assembly)
        .unwrap_or_else(|e| panic!("cannot load assembly: {}\n{}", e, assembly))
        .with_input(input);
    machine
        .run()
        .unwrap_or_else(|e| panic!("execution failed: {}\n{}", e, assembly))
}

/// Instruction and label lines of `assembly`, one per line, unindented.
pub fn listing(assembly: &str) -> String {
    assembly
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
