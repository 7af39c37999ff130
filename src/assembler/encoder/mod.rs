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

pub mod constants;
mod instruction_encoders;
pub mod utility_functions;

use crate::assembler::symbol_table::{get_symbol, SymbolTable};
use crate::ast::Instruction;
use crate::errors::AssemblyError;
use instruction_encoders::{arithmetic, control_flow, load_store, misc};

/// Encodes a single parsed instruction at `pc`, resolving any label
/// operand against the symbol table built in pass 1.
pub fn encode_instruction(
    instruction: &Instruction,
    symbol_table: &SymbolTable,
    pc: u32,
    line: usize,
) -> Result<Vec<u8>, AssemblyError> {
    match instruction {
        Instruction::Nop => Ok(misc::encode_nop()),
        Instruction::Ret => Ok(misc::encode_ret()),

        Instruction::Ldi(rd, k) => load_store::encode_ldi(*rd, *k, line),
        Instruction::In(rd, a) => load_store::encode_in(*rd, *a, line),
        Instruction::Out(a, rr) => load_store::encode_out(*a, *rr, line),
        Instruction::Ld(_rd) => Ok(load_store::encode_ld()),
        Instruction::St(_rr) => Ok(load_store::encode_st()),

        Instruction::Add(rd, rr) => arithmetic::encode_add(*rd, *rr, line),
        Instruction::Sub(rd, rr) => arithmetic::encode_sub(*rd, *rr, line),
        Instruction::Cp(rd, rr) => arithmetic::encode_cp(*rd, *rr, line),
        Instruction::Clr(rd) => Ok(arithmetic::encode_clr(*rd)),
        Instruction::Dec(rd) => Ok(arithmetic::encode_dec(*rd)),

        Instruction::Rjmp(label) => {
            let target = get_symbol(symbol_table, label, line)?;
            control_flow::encode_rjmp(target, pc, line)
        }
        Instruction::Rcall(label) => {
            let target = get_symbol(symbol_table, label, line)?;
            control_flow::encode_rcall(target, pc, line)
        }
        Instruction::Brne(label) => {
            let target = get_symbol(symbol_table, label, line)?;
            control_flow::encode_brne(target, pc, line)
        }
        Instruction::Brge(label) => {
            let target = get_symbol(symbol_table, label, line)?;
            control_flow::encode_brge(target, pc, line)
        }
        Instruction::Brlt(label) => {
            let target = get_symbol(symbol_table, label, line)?;
            control_flow::encode_brlt(target, pc, line)
        }
        Instruction::Jmp(label) => {
            let target = get_symbol(symbol_table, label, line)?;
            Ok(control_flow::encode_jmp(target))
        }
        Instruction::Call(label) => {
            let target = get_symbol(symbol_table, label, line)?;
            Ok(control_flow::encode_call(target))
        }
    }
}
