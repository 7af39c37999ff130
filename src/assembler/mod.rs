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

pub mod encoder;
pub mod instruction_table;
pub mod symbol_table;

use crate::ast::{LineKind, SourceLine};
use crate::errors::AssemblyError;
use symbol_table::SymbolTable;

/// ATmega328 flash size in bytes; the first pass must never let the
/// running PC exceed this.
pub const FLASH_SIZE: u32 = 0x8000;

/// Pass 1: assigns every label its address and validates that every
/// instruction line names a known mnemonic. Operands are not inspected
/// at all here, so an out-of-range register or immediate elsewhere in
/// the program cannot surface before a duplicate label does.
pub fn build_symbol_table(lines: &[SourceLine]) -> Result<SymbolTable, AssemblyError> {
    let mut symbol_table = SymbolTable::new();
    let mut pc: u32 = 0;

    for line in lines {
        match &line.kind {
            LineKind::Empty | LineKind::Comment => {}
            LineKind::Label(name) => {
                if symbol_table.contains_key(name) {
                    return Err(AssemblyError::DuplicateLabel {
                        line: line.line_number,
                        name: name.clone(),
                    });
                }
                symbol_table.insert(name.clone(), pc);
            }
            LineKind::Instruction { mnemonic, .. } => {
                let descriptor = instruction_table::lookup(mnemonic).ok_or_else(|| {
                    AssemblyError::UnknownMnemonic {
                        line: line.line_number,
                        mnemonic: mnemonic.clone(),
                    }
                })?;
                pc += descriptor.length as u32;
                if pc > FLASH_SIZE {
                    return Err(AssemblyError::ProgramTooLarge { pc });
                }
            }
        }
    }

    Ok(symbol_table)
}

/// Pass 2: re-walks the same line stream, parsing each instruction
/// line's operands and encoding it into 2 or 4 bytes, consulting the
/// symbol table built in pass 1 for branch/jump targets.
pub fn generate_bytecode(
    lines: &[SourceLine],
    symbol_table: &SymbolTable,
) -> Result<Vec<u8>, AssemblyError> {
    let mut bytecode = Vec::new();
    let mut pc: u32 = 0;

    for line in lines {
        match &line.kind {
            LineKind::Empty | LineKind::Comment | LineKind::Label(_) => {}
            LineKind::Instruction { mnemonic, operands } => {
                let instruction =
                    crate::parser::ast_builder::build_instruction(mnemonic, operands, line.line_number)?;
                let bytes = encoder::encode_instruction(&instruction, symbol_table, pc, line.line_number)?;
                pc += bytes.len() as u32;
                bytecode.extend(bytes);
            }
        }
    }

    Ok(bytecode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    #[test]
    fn empty_and_comment_only_program_produces_no_bytes() {
        let lines = parse_source("; just a comment\n\n   \n");
        let symbols = build_symbol_table(&lines).unwrap();
        let bytecode = generate_bytecode(&lines, &symbols).unwrap();
        assert!(bytecode.is_empty());
    }

    #[test]
    fn duplicate_label_is_caught_in_first_pass() {
        let lines = parse_source("loop:\nNOP\nloop:\n");
        let err = build_symbol_table(&lines).unwrap_err();
        assert!(matches!(err, AssemblyError::DuplicateLabel { line: 3, .. }));
    }

    #[test]
    fn unknown_mnemonic_is_caught_in_first_pass() {
        let lines = parse_source("FROB R1, R2\n");
        let err = build_symbol_table(&lines).unwrap_err();
        assert!(matches!(err, AssemblyError::UnknownMnemonic { line: 1, .. }));
    }

    #[test]
    fn program_too_large_is_caught_in_first_pass() {
        let source = "NOP\n".repeat(0x4001);
        let lines = parse_source(&source);
        let err = build_symbol_table(&lines).unwrap_err();
        assert!(matches!(err, AssemblyError::ProgramTooLarge { .. }));
    }
}
