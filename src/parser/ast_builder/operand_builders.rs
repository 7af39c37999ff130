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

/// Splits an operand list on commas, trimming whitespace from each
/// token. The source's `trim` only strips whitespace, never commas, so
/// every operand token is stripped of a stray leading/trailing comma
/// here defensively before it is parsed.
pub fn split_operands(operands: &str) -> Vec<String> {
    operands
        .split(',')
        .map(|tok| tok.trim().trim_matches(',').trim().to_string())
        .filter(|tok| !tok.is_empty())
        .collect()
}

/// Parses a register operand (`R<n>` or `r<n>`, n in 0..=31).
pub fn parse_register(token: &str, line: usize) -> Result<Register, AssemblyError> {
    let rest = token
        .strip_prefix('R')
        .or_else(|| token.strip_prefix('r'))
        .ok_or_else(|| invalid_register(line, token))?;

    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_register(line, token));
    }

    let value: u32 = rest.parse().map_err(|_| invalid_register(line, token))?;
    if value > 31 {
        return Err(invalid_register(line, token));
    }

    Ok(Register(value as u8))
}

/// Parses a decimal, `0x`-hex, or `0`-leading octal integer literal.
pub fn parse_immediate(token: &str, line: usize, mnemonic: &str) -> Result<Immediate, AssemblyError> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let value = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16)
    } else if digits.len() > 1 && digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit()) {
        i64::from_str_radix(&digits[1..], 8)
    } else {
        digits.parse::<i64>()
    }
    .map_err(|_| AssemblyError::ImmediateOutOfRange {
        line,
        mnemonic: mnemonic.to_string(),
        value: 0,
        expected: format!("a valid integer literal, got `{}`", token),
    })?;

    Ok(if negative { -value } else { value })
}

/// Parses a label reference: any non-empty token that is not itself a
/// register or immediate literal. Whether the name actually resolves is
/// checked later, against the symbol table.
pub fn parse_label(token: &str, line: usize, mnemonic: &str) -> Result<String, AssemblyError> {
    if token.is_empty() {
        return Err(AssemblyError::UnknownLabel {
            line,
            name: String::new(),
        });
    }
    let _ = mnemonic;
    Ok(token.to_string())
}

fn invalid_register(line: usize, token: &str) -> AssemblyError {
    AssemblyError::InvalidRegister {
        line,
        text: token.to_string(),
    }
}
