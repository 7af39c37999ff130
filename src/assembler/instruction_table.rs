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

/// Shape of a mnemonic's operand list. `parser::ast_builder::build_instruction`
/// dispatches on this tag to pick which category module parses a given
/// mnemonic's operands; mnemonics sharing a shape still differ in their
/// own range/packing rules, so each category function matches again on
/// the mnemonic once it knows the shared operand layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperandShape {
    None,
    Reg,
    RegReg,
    RegImm,
    ImmReg,
    RegX,
    XReg,
    Label,
}

#[derive(Debug, Copy, Clone)]
pub struct InstructionDescriptor {
    pub mnemonic: &'static str,
    pub length: u8,
    pub operand_shape: OperandShape,
}

const fn d(mnemonic: &'static str, length: u8, operand_shape: OperandShape) -> InstructionDescriptor {
    InstructionDescriptor {
        mnemonic,
        length,
        operand_shape,
    }
}

/// Static mnemonic -> descriptor mapping, immutable at runtime. Both
/// passes consult this table: the first pass only reads `length`, the
/// second additionally uses it to confirm the mnemonic exists before
/// dispatching to its encoder.
pub static INSTRUCTION_TABLE: &[InstructionDescriptor] = &[
    d("NOP", 2, OperandShape::None),
    d("RET", 2, OperandShape::None),
    d("LDI", 2, OperandShape::RegImm),
    d("ADD", 2, OperandShape::RegReg),
    d("SUB", 2, OperandShape::RegReg),
    d("CP", 2, OperandShape::RegReg),
    d("CLR", 2, OperandShape::Reg),
    d("DEC", 2, OperandShape::Reg),
    d("IN", 2, OperandShape::RegImm),
    d("OUT", 2, OperandShape::ImmReg),
    d("LD", 2, OperandShape::RegX),
    d("ST", 2, OperandShape::XReg),
    d("RJMP", 2, OperandShape::Label),
    d("RCALL", 2, OperandShape::Label),
    d("BRNE", 2, OperandShape::Label),
    d("BRGE", 2, OperandShape::Label),
    d("BRLT", 2, OperandShape::Label),
    d("JMP", 4, OperandShape::Label),
    d("CALL", 4, OperandShape::Label),
];

pub fn lookup(mnemonic: &str) -> Option<&'static InstructionDescriptor> {
    INSTRUCTION_TABLE
        .iter()
        .find(|desc| desc.mnemonic.eq_ignore_ascii_case(mnemonic))
}
