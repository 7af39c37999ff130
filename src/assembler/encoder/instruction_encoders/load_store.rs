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

use crate::assembler::encoder::constants::*;
use crate::assembler::encoder::utility_functions::opcode_bytes;
use crate::ast::{Immediate, Register};
use crate::errors::AssemblyError;

fn require_immediate_range(
    value: Immediate,
    line: usize,
    mnemonic: &str,
    min: i64,
    max: i64,
) -> Result<u16, AssemblyError> {
    if value < min || value > max {
        return Err(AssemblyError::ImmediateOutOfRange {
            line,
            mnemonic: mnemonic.to_string(),
            value,
            expected: format!("{}..={}", min, max),
        });
    }
    Ok(value as u16)
}

pub fn encode_ldi(rd: Register, k: Immediate, line: usize) -> Result<Vec<u8>, AssemblyError> {
    if !(16..=31).contains(&rd.0) {
        return Err(AssemblyError::InvalidRegister {
            line,
            text: format!("R{}", rd.0),
        });
    }
    let k = require_immediate_range(k, line, "LDI", 0, 255)?;
    let opcode = LDI_BASE_OPCODE
        | ((k & 0xF0) << 4)
        | (((rd.0 as u16) - 16) << 4)
        | (k & 0x0F);
    Ok(opcode_bytes(opcode).to_vec())
}

pub fn encode_in(rd: Register, a: Immediate, line: usize) -> Result<Vec<u8>, AssemblyError> {
    let a = require_immediate_range(a, line, "IN", 0, 63)?;
    let opcode = IN_BASE_OPCODE | ((a & 0x30) << 5) | (((rd.0 as u16) & 0x1F) << 4) | (a & 0x0F);
    Ok(opcode_bytes(opcode).to_vec())
}

pub fn encode_out(a: Immediate, rr: Register, line: usize) -> Result<Vec<u8>, AssemblyError> {
    let a = require_immediate_range(a, line, "OUT", 0, 63)?;
    let opcode = OUT_BASE_OPCODE | ((a & 0x30) << 5) | (((rr.0 as u16) & 0x1F) << 4) | (a & 0x0F);
    Ok(opcode_bytes(opcode).to_vec())
}

/// Emits the fixed base-only opcode regardless of the named register,
/// per the "base-only variant emitted" rule for LD Rd,X.
pub fn encode_ld() -> Vec<u8> {
    opcode_bytes(LD_X_OPCODE).to_vec()
}

/// Emits the fixed base-only opcode regardless of the named register,
/// per the "base-only variant emitted" rule for ST X,Rr.
pub fn encode_st() -> Vec<u8> {
    opcode_bytes(ST_X_OPCODE).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ldi_r16_0x0a_matches_spec_example() {
        // LDI R16, 0x0A -> bytes 0A E0
        assert_eq!(encode_ldi(Register(16), 0x0A, 1).unwrap(), vec![0x0A, 0xE0]);
    }

    #[test]
    fn ldi_rejects_rd_below_16() {
        assert!(encode_ldi(Register(15), 0, 1).is_err());
    }

    #[test]
    fn ldi_rejects_immediate_above_255() {
        assert!(encode_ldi(Register(16), 256, 1).is_err());
    }

    #[test]
    fn in_out_reject_port_above_63() {
        assert!(encode_in(Register(0), 64, 1).is_err());
        assert!(encode_out(64, Register(0), 1).is_err());
    }

    #[test]
    fn ld_st_emit_fixed_opcodes() {
        assert_eq!(encode_ld(), vec![0x0C, 0x90]);
        assert_eq!(encode_st(), vec![0x0C, 0x92]);
    }
}
