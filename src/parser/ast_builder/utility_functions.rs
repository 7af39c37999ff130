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

use crate::ast::{Immediate, Register};
use crate::errors::AssemblyError;

/// Re-checks a parsed register against a mnemonic-specific range (e.g.
/// LDI only accepts R16..R31). `token` is the original operand text, for
/// the error message.
pub fn require_register_range(
    reg: Register,
    token: &str,
    line: usize,
    min: u8,
    max: u8,
) -> Result<Register, AssemblyError> {
    if reg.0 < min || reg.0 > max {
        return Err(AssemblyError::InvalidRegister {
            line,
            text: token.to_string(),
        });
    }
    Ok(reg)
}

/// Checks a parsed immediate against a mnemonic-specific range.
pub fn require_immediate_range(
    value: Immediate,
    line: usize,
    mnemonic: &str,
    min: i64,
    max: i64,
) -> Result<Immediate, AssemblyError> {
    if value < min || value > max {
        return Err(AssemblyError::ImmediateOutOfRange {
            line,
            mnemonic: mnemonic.to_string(),
            value,
            expected: format!("{}..={}", min, max),
        });
    }
    Ok(value)
}
