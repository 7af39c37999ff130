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

use super::operand_builders::{parse_label, split_operands};
use crate::ast::Instruction;
use crate::errors::AssemblyError;

/// Builds the branch/jump/call instructions (`OperandShape::Label`):
/// every one of these takes a single label operand and differs only in
/// which `Instruction` variant and encoder it feeds.
pub fn build_label(mnemonic: &str, operands: &str, line: usize) -> Result<Instruction, AssemblyError> {
    let tokens = split_operands(operands);
    let label = parse_label(
        tokens.first().map(String::as_str).unwrap_or(""),
        line,
        mnemonic,
    )?;

    match mnemonic {
        "RJMP" => Ok(Instruction::Rjmp(label)),
        "RCALL" => Ok(Instruction::Rcall(label)),
        "BRNE" => Ok(Instruction::Brne(label)),
        "BRGE" => Ok(Instruction::Brge(label)),
        "BRLT" => Ok(Instruction::Brlt(label)),
        "JMP" => Ok(Instruction::Jmp(label)),
        "CALL" => Ok(Instruction::Call(label)),
        _ => unreachable!("instruction table listed `{mnemonic}` as OperandShape::Label"),
    }
}
