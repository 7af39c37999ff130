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

pub mod ast_builder;

use crate::ast::{LineKind, SourceLine};

/// Normalizes and classifies raw source text into a line stream. This is
/// the only pass over the text itself: both assembler passes downstream
/// consume `Vec<SourceLine>`, never raw strings.
pub fn parse_source(source: &str) -> Vec<SourceLine> {
    source
        .lines()
        .enumerate()
        .map(|(idx, raw)| SourceLine {
            line_number: idx + 1,
            kind: classify(trim(raw)),
        })
        .collect()
}

/// Trims leading/trailing ASCII space and tab only. Case, internal
/// whitespace, and anything else about the line is left untouched.
fn trim(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\t')
}

fn classify(trimmed: &str) -> LineKind {
    if trimmed.is_empty() {
        return LineKind::Empty;
    }
    if trimmed.starts_with(';') {
        return LineKind::Comment;
    }
    if let Some(name) = trimmed.strip_suffix(':') {
        return LineKind::Label(name.to_string());
    }

    let mnemonic_end = trimmed
        .find(|c: char| c == ' ' || c == '\t')
        .unwrap_or(trimmed.len());
    let mnemonic = trimmed[..mnemonic_end].to_string();
    let operands = trimmed[mnemonic_end..]
        .trim_matches(|c| c == ' ' || c == '\t')
        .to_string();

    LineKind::Instruction { mnemonic, operands }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_blank_and_comment_lines() {
        let lines = parse_source("\n  \n; a comment\n   ; indented comment\n");
        assert_eq!(lines[0].kind, LineKind::Empty);
        assert_eq!(lines[1].kind, LineKind::Empty);
        assert_eq!(lines[2].kind, LineKind::Comment);
        assert_eq!(lines[3].kind, LineKind::Comment);
    }

    #[test]
    fn classifies_label_definitions() {
        let lines = parse_source("loop:\n  end:  \n");
        assert_eq!(lines[0].kind, LineKind::Label("loop".to_string()));
        assert_eq!(lines[1].kind, LineKind::Label("end".to_string()));
    }

    #[test]
    fn classifies_instruction_with_operands() {
        let lines = parse_source("  LDI R16, 0x0A  \nNOP\n");
        assert_eq!(
            lines[0].kind,
            LineKind::Instruction {
                mnemonic: "LDI".to_string(),
                operands: "R16, 0x0A".to_string(),
            }
        );
        assert_eq!(
            lines[1].kind,
            LineKind::Instruction {
                mnemonic: "NOP".to_string(),
                operands: String::new(),
            }
        );
    }

    #[test]
    fn preserves_line_numbers_across_blank_lines() {
        let lines = parse_source("NOP\n\nRET\n");
        assert_eq!(lines[0].line_number, 1);
        assert_eq!(lines[1].line_number, 2);
        assert_eq!(lines[2].line_number, 3);
    }
}
