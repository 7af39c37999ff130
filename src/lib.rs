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

pub mod assembler;
pub mod ast;
pub mod emitter;
pub mod errors;
pub mod file_reader;
pub mod parser;

use std::path::Path;

use emitter::OutputMode;
use errors::AssemblyError;
use file_reader::FileReader;

/// Runs both passes over already-loaded source text and returns the
/// assembled machine code. Takes no path or reader, so it is trivial to
/// exercise directly from tests without touching the filesystem.
pub fn assemble(source: &str) -> Result<Vec<u8>, AssemblyError> {
    let lines = parser::parse_source(source);
    let symbol_table = assembler::build_symbol_table(&lines)?;
    assembler::generate_bytecode(&lines, &symbol_table)
}

/// Reads `input` through `reader`, assembles it, and writes the result
/// to `output` in the requested format. The only piece of this crate
/// that touches the filesystem.
pub fn run<F: FileReader>(
    input: &Path,
    output: &Path,
    mode: OutputMode,
    reader: &F,
) -> Result<(), AssemblyError> {
    let source = reader.read_to_string(input)?;
    let bytecode = assemble(&source)?;
    emitter::write_output(output, &bytecode, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_ldi_from_source_text() {
        assert_eq!(assemble("LDI R16, 0x0A\n").unwrap(), vec![0x0A, 0xE0]);
    }

    #[test]
    fn assembles_a_forward_branch_loop() {
        // LDI R16,10 ; CP loop:RET BRNE loop-ish scenario from the worked examples
        let source = "loop:\nDEC R16\nBRNE loop\n";
        let bytecode = assemble(source).unwrap();
        assert_eq!(bytecode.len(), 4);
    }

    #[test]
    fn run_reads_through_a_mock_file_reader_and_writes_bin() {
        use file_reader::MockFileReader;
        use std::path::PathBuf;
        use tempfile::tempdir;

        let mut reader = MockFileReader::default();
        reader.add_file("in.asm", "NOP\n");

        let dir = tempdir().unwrap();
        let output = dir.path().join("out.bin");

        run(&PathBuf::from("in.asm"), &output, OutputMode::Bin, &reader).unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), vec![0x00, 0x00]);
    }
}
