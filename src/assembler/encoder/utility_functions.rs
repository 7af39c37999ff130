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

use crate::errors::AssemblyError;

/// Computes `(target_pc - current_pc - 2) / 2` in signed arithmetic and
/// checks it against the field width, masking only after the range
/// check so overflow never silently wraps a too-far jump into range.
pub fn relative_word_offset(
    target_pc: u32,
    current_pc: u32,
    mnemonic: &str,
    line: usize,
    min: i32,
    max: i32,
) -> Result<i32, AssemblyError> {
    let offset = (target_pc as i64 - current_pc as i64 - 2) / 2;
    let offset = offset as i32;

    if offset < min || offset > max {
        return Err(AssemblyError::BranchOffsetOutOfRange {
            line,
            mnemonic: mnemonic.to_string(),
            offset,
            expected: format!("{}..={}", min, max),
        });
    }

    Ok(offset)
}

/// Splits a little-endian 16-bit opcode into its two emitted bytes.
pub fn opcode_bytes(opcode: u16) -> [u8; 2] {
    opcode.to_le_bytes()
}
