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

use avrasm::emitter::intel_hex;
use avrasm::emitter::{write_output, OutputMode};
use avrasm::errors::AssemblyError;
use avrasm::file_reader::MockFileReader;
use avrasm::{assemble, run};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn empty_ldi() {
    assert_eq!(assemble("LDI R16, 0x0A\n").unwrap(), vec![0x0A, 0xE0]);
}

#[test]
fn clr_r17() {
    // CLR R17 -> EOR R17,R17 -> 0x2400 | (17 << 4) | 1 = 0x2511, bytes 11 25
    assert_eq!(assemble("CLR R17\n").unwrap(), vec![0x11, 0x25]);
}

#[test]
fn nop_then_ret() {
    assert_eq!(assemble("NOP\nRET\n").unwrap(), vec![0x00, 0x00, 0x08, 0x95]);
}

#[test]
fn forward_rjmp_past_a_nop() {
    let bytecode = assemble("RJMP end\nNOP\nend:\n").unwrap();
    assert_eq!(bytecode, vec![0x01, 0xC0, 0x00, 0x00]);
}

#[test]
fn loop_with_brne() {
    let source = "LDI R16,3\nloop:\nDEC R16\nBRNE loop\n";
    let bytecode = assemble(source).unwrap();
    // loop at pc=2, BRNE at pc=4: offset (2-4-2)/2 = -2 -> 0x7E.
    // 0xF400 | (0x7E << 3) | 0x01 = 0xF7F1, bytes F1 F7.
    assert_eq!(bytecode, vec![0x03, 0xE0, 0x0A, 0x95, 0xF1, 0xF7]);
}

#[test]
fn intel_hex_small_image() {
    let rendered = intel_hex::render(&[0x0A, 0xE0, 0x08, 0x95]);
    assert!(rendered.ends_with(":00000001FF\n"));
    assert_eq!(rendered.lines().next().unwrap().len(), 19);
}

#[test]
fn empty_and_comment_only_program_is_empty() {
    assert_eq!(assemble("; header comment\n\n   \n").unwrap(), Vec::<u8>::new());
    assert_eq!(intel_hex::render(&[]), ":00000001FF\n");
}

#[test]
fn brge_and_brlt_produce_identical_bytes_for_the_same_offset() {
    let brge = assemble("loop:\nNOP\nBRGE loop\n").unwrap();
    let brlt = assemble("loop:\nNOP\nBRLT loop\n").unwrap();
    assert_eq!(brge, brlt);
}

#[test]
fn add_sub_cp_reject_an_rr_register_above_15() {
    assert!(matches!(
        assemble("ADD R1, R16\n"),
        Err(AssemblyError::InvalidRegister { .. })
    ));
    assert!(matches!(
        assemble("SUB R1, R16\n"),
        Err(AssemblyError::InvalidRegister { .. })
    ));
    assert!(matches!(
        assemble("CP R1, R16\n"),
        Err(AssemblyError::InvalidRegister { .. })
    ));
}

#[test]
fn ldi_rejects_a_register_below_16() {
    assert!(matches!(
        assemble("LDI R1, 5\n"),
        Err(AssemblyError::InvalidRegister { .. })
    ));
}

#[test]
fn ldi_rejects_an_out_of_range_immediate() {
    assert!(matches!(
        assemble("LDI R16, 256\n"),
        Err(AssemblyError::ImmediateOutOfRange { .. })
    ));
}

#[test]
fn rjmp_rejects_an_offset_beyond_the_12_bit_field() {
    let source = format!("RJMP far\n{}far:\n", "NOP\n".repeat(3000));
    assert!(matches!(
        assemble(&source),
        Err(AssemblyError::BranchOffsetOutOfRange { .. })
    ));
}

#[test]
fn brne_rejects_an_offset_beyond_the_7_bit_field() {
    let source = format!("BRNE far\n{}far:\n", "NOP\n".repeat(100));
    assert!(matches!(
        assemble(&source),
        Err(AssemblyError::BranchOffsetOutOfRange { .. })
    ));
}

#[test]
fn duplicate_label_is_caught_before_any_operand_is_parsed() {
    // Second `loop:` should fail even though ADD's Rr would also be invalid.
    let err = assemble("loop:\nADD R1, R16\nloop:\n").unwrap_err();
    assert!(matches!(err, AssemblyError::DuplicateLabel { line: 3, .. }));
}

#[test]
fn unknown_mnemonic_is_caught_before_any_operand_is_parsed() {
    let err = assemble("FROB R1, R16\n").unwrap_err();
    assert!(matches!(err, AssemblyError::UnknownMnemonic { line: 1, .. }));
}

#[test]
fn unknown_label_reference_is_reported() {
    let err = assemble("RJMP nowhere\n").unwrap_err();
    assert!(matches!(err, AssemblyError::UnknownLabel { line: 1, .. }));
}

#[test]
fn intel_hex_round_trips_through_its_own_parser() {
    let bytes = vec![0x0A, 0xE0, 0x08, 0x95, 0x01, 0xC0];
    let rendered = intel_hex::render(&bytes);
    let mut recovered = Vec::new();
    for line in rendered.lines() {
        if let Some(record) = intel_hex::parse_record(line) {
            if record.record_type == 0x00 {
                recovered.extend(record.data);
            }
        }
    }
    assert_eq!(recovered, bytes);
}

#[test]
fn run_reads_through_the_file_reader_trait_and_writes_hex() {
    let mut reader = MockFileReader::default();
    reader.add_file("prog.asm", "NOP\nRET\n");

    let dir = tempdir().unwrap();
    let output = dir.path().join("prog.hex");

    run(Path::new("prog.asm"), &output, OutputMode::Hex, &reader).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with(":0400000000000895"));
    assert!(contents.ends_with(":00000001FF\n"));
}

#[test]
fn failed_assembly_leaves_no_file_at_the_output_path() {
    let mut reader = MockFileReader::default();
    reader.add_file("bad.asm", "FROB R1\n");

    let dir = tempdir().unwrap();
    let output = dir.path().join("bad.bin");

    let result = run(Path::new("bad.asm"), &output, OutputMode::Bin, &reader);
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn write_output_does_not_disturb_an_existing_file_when_rendering_succeeds_elsewhere() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.bin");
    std::fs::write(&path, b"previous contents").unwrap();

    write_output(&path, &[0xAA, 0xBB], OutputMode::Bin).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), vec![0xAA, 0xBB]);
}
