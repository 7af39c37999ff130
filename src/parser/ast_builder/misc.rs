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

use crate::ast::Instruction;
use crate::errors::AssemblyError;

/// Builds the no-operand instructions (`OperandShape::None`).
pub fn build(mnemonic: &str, _line: usize) -> Result<Instruction, AssemblyError> {
    match mnemonic {
        "NOP" => Ok(Instruction::Nop),
        "RET" => Ok(Instruction::Ret),
        _ => unreachable!("instruction table listed `{mnemonic}` as OperandShape::None"),
    }
}
