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

use super::operand_builders::{parse_register, split_operands};
use crate::ast::{Instruction, Register};
use crate::errors::AssemblyError;

fn reg_reg(operands: &str, line: usize) -> Result<(Register, Register), AssemblyError> {
    let tokens = split_operands(operands);
    let rd = parse_register(tokens.first().map(String::as_str).unwrap_or(""), line)?;
    let rr = parse_register(tokens.get(1).map(String::as_str).unwrap_or(""), line)?;
    Ok((rd, rr))
}

fn reg_only(operands: &str, line: usize) -> Result<Register, AssemblyError> {
    let tokens = split_operands(operands);
    parse_register(tokens.first().map(String::as_str).unwrap_or(""), line)
}

/// Builds the two-register ALU instructions (`OperandShape::RegReg`).
pub fn build_reg_reg(mnemonic: &str, operands: &str, line: usize) -> Result<Instruction, AssemblyError> {
    let (rd, rr) = reg_reg(operands, line)?;
    match mnemonic {
        "ADD" => Ok(Instruction::Add(rd, rr)),
        "SUB" => Ok(Instruction::Sub(rd, rr)),
        "CP" => Ok(Instruction::Cp(rd, rr)),
        _ => unreachable!("instruction table listed `{mnemonic}` as OperandShape::RegReg"),
    }
}

/// Builds the single-register instructions (`OperandShape::Reg`).
pub fn build_reg(mnemonic: &str, operands: &str, line: usize) -> Result<Instruction, AssemblyError> {
    let rd = reg_only(operands, line)?;
    match mnemonic {
        "CLR" => Ok(Instruction::Clr(rd)),
        "DEC" => Ok(Instruction::Dec(rd)),
        _ => unreachable!("instruction table listed `{mnemonic}` as OperandShape::Reg"),
    }
}
