/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

// Register and immediate operands carry no validation of their own;
// range checks live with the mnemonic that consumes them, since the
// same bit pattern is valid for one instruction and not another (e.g.
// R8 is fine for DEC but not for LDI).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Register(pub u8);

pub type Immediate = i64;

// One variant per mnemonic + operand-shape pair. Branch/jump targets are
// always label names here: this ISA subset never accepts a computed
// offset in source text, only `LABEL`.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Nop,
    Ret,
    Ldi(Register, Immediate),
    Add(Register, Register),
    Sub(Register, Register),
    Cp(Register, Register),
    Clr(Register),
    Dec(Register),
    In(Register, Immediate),
    Out(Immediate, Register),
    Ld(Register),
    St(Register),
    Rjmp(String),
    Rcall(String),
    Brne(String),
    Brge(String),
    Brlt(String),
    Jmp(String),
    Call(String),
}

// A single normalized, classified line of source. `kind` carries no
// payload for blank lines and comments, but the slot is still kept so
// diagnostics can cite the original line number.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub line_number: usize,
    pub kind: LineKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Empty,
    Comment,
    Label(String),
    Instruction { mnemonic: String, operands: String },
}
