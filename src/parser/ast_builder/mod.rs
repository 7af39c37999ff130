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

mod arithmetic;
mod control_flow;
mod load_store;
mod misc;
pub mod operand_builders;
pub mod utility_functions;

use crate::assembler::instruction_table::{self, OperandShape};
use crate::ast::Instruction;
use crate::errors::AssemblyError;

/// Builds a fully parsed `Instruction` from a mnemonic and its raw
/// operand text. Called only by the second pass: the first pass never
/// needs operand values, only the mnemonic's size from the instruction
/// table.
///
/// Dispatch goes through the instruction table's `operand_shape`, not a
/// flat match on the mnemonic string: every mnemonic sharing a shape is
/// built by the same category function, so adding a mnemonic to an
/// existing shape (another `RegReg` ALU op, say) means adding one arm
/// inside that function rather than a new branch here.
pub fn build_instruction(
    mnemonic: &str,
    operands: &str,
    line: usize,
) -> Result<Instruction, AssemblyError> {
    let descriptor = instruction_table::lookup(mnemonic).ok_or_else(|| AssemblyError::UnknownMnemonic {
        line,
        mnemonic: mnemonic.to_string(),
    })?;

    match descriptor.operand_shape {
        OperandShape::None => misc::build(descriptor.mnemonic, line),
        OperandShape::Reg => arithmetic::build_reg(descriptor.mnemonic, operands, line),
        OperandShape::RegReg => arithmetic::build_reg_reg(descriptor.mnemonic, operands, line),
        OperandShape::RegImm => load_store::build_reg_imm(descriptor.mnemonic, operands, line),
        OperandShape::ImmReg => load_store::build_imm_reg(descriptor.mnemonic, operands, line),
        OperandShape::RegX => load_store::build_reg_x(descriptor.mnemonic, operands, line),
        OperandShape::XReg => load_store::build_x_reg(descriptor.mnemonic, operands, line),
        OperandShape::Label => control_flow::build_label(descriptor.mnemonic, operands, line),
    }
}
