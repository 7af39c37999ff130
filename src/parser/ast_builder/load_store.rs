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

use super::operand_builders::{parse_immediate, parse_register, split_operands};
use super::utility_functions::{require_immediate_range, require_register_range};
use crate::ast::{Instruction, Register};
use crate::errors::AssemblyError;

/// Builds the register+immediate instructions (`OperandShape::RegImm`):
/// LDI restricts `Rd` to R16..R31 and `K` to 0..255; IN leaves `Rd`
/// unrestricted and restricts its immediate (the I/O port address `A`)
/// to 0..63.
pub fn build_reg_imm(mnemonic: &str, operands: &str, line: usize) -> Result<Instruction, AssemblyError> {
    let tokens = split_operands(operands);
    let rd_token = tokens.first().map(String::as_str).unwrap_or("");
    let rd = parse_register(rd_token, line)?;
    let imm_token = tokens.get(1).map(String::as_str).unwrap_or("");

    match mnemonic {
        "LDI" => {
            let rd = require_register_range(rd, rd_token, line, 16, 31)?;
            let k = parse_immediate(imm_token, line, "LDI")?;
            let k = require_immediate_range(k, line, "LDI", 0, 255)?;
            Ok(Instruction::Ldi(rd, k))
        }
        "IN" => {
            let a = parse_immediate(imm_token, line, "IN")?;
            let a = require_immediate_range(a, line, "IN", 0, 63)?;
            Ok(Instruction::In(rd, a))
        }
        _ => unreachable!("instruction table listed `{mnemonic}` as OperandShape::RegImm"),
    }
}

/// Builds the immediate+register instructions (`OperandShape::ImmReg`):
/// OUT's I/O port address `A` is restricted to 0..63.
pub fn build_imm_reg(mnemonic: &str, operands: &str, line: usize) -> Result<Instruction, AssemblyError> {
    let tokens = split_operands(operands);
    let a_token = tokens.first().map(String::as_str).unwrap_or("");
    let rr = parse_register(tokens.get(1).map(String::as_str).unwrap_or(""), line)?;

    match mnemonic {
        "OUT" => {
            let a = parse_immediate(a_token, line, "OUT")?;
            let a = require_immediate_range(a, line, "OUT", 0, 63)?;
            Ok(Instruction::Out(a, rr))
        }
        _ => unreachable!("instruction table listed `{mnemonic}` as OperandShape::ImmReg"),
    }
}

// LD Rd,X and ST X,Rr: the second operand is the literal token `X`, the
// fixed pointer register, not a numbered register. The assembler still
// parses and range-checks the named register for diagnostics, even
// though the base-only opcode it emits does not encode it.
fn require_x_token(token: &str, line: usize) -> Result<(), AssemblyError> {
    if token.eq_ignore_ascii_case("X") {
        Ok(())
    } else {
        Err(AssemblyError::InvalidRegister {
            line,
            text: token.to_string(),
        })
    }
}

/// Builds the register+X instructions (`OperandShape::RegX`): `LD Rd,X`.
pub fn build_reg_x(mnemonic: &str, operands: &str, line: usize) -> Result<Instruction, AssemblyError> {
    let tokens = split_operands(operands);
    let rd: Register = parse_register(tokens.first().map(String::as_str).unwrap_or(""), line)?;
    require_x_token(tokens.get(1).map(String::as_str).unwrap_or(""), line)?;

    match mnemonic {
        "LD" => Ok(Instruction::Ld(rd)),
        _ => unreachable!("instruction table listed `{mnemonic}` as OperandShape::RegX"),
    }
}

/// Builds the X+register instructions (`OperandShape::XReg`): `ST X,Rr`.
pub fn build_x_reg(mnemonic: &str, operands: &str, line: usize) -> Result<Instruction, AssemblyError> {
    let tokens = split_operands(operands);
    require_x_token(tokens.first().map(String::as_str).unwrap_or(""), line)?;
    let rr: Register = parse_register(tokens.get(1).map(String::as_str).unwrap_or(""), line)?;

    match mnemonic {
        "ST" => Ok(Instruction::St(rr)),
        _ => unreachable!("instruction table listed `{mnemonic}` as OperandShape::XReg"),
    }
}
