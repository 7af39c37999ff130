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

const RECORD_TYPE_DATA: u8 = 0x00;
const RECORD_TYPE_EOF: u8 = 0x01;
const BYTES_PER_RECORD: usize = 16;

fn checksum(count: u8, address: u16, record_type: u8, data: &[u8]) -> u8 {
    let mut sum: u8 = count;
    sum = sum.wrapping_add((address >> 8) as u8);
    sum = sum.wrapping_add((address & 0xFF) as u8);
    sum = sum.wrapping_add(record_type);
    for byte in data {
        sum = sum.wrapping_add(*byte);
    }
    (!sum).wrapping_add(1)
}

fn format_record(count: u8, address: u16, record_type: u8, data: &[u8]) -> String {
    let mut line = format!(":{:02x}{:04x}{:02x}", count, address, record_type);
    for byte in data {
        line.push_str(&format!("{:02x}", byte));
    }
    line.push_str(&format!("{:02x}\n", checksum(count, address, record_type, data)));
    line
}

/// Renders `bytes` as Intel HEX, splitting into 16-byte data records and
/// terminating with the standard end-of-file record.
pub fn render(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (chunk_index, chunk) in bytes.chunks(BYTES_PER_RECORD).enumerate() {
        let address = (chunk_index * BYTES_PER_RECORD) as u16;
        out.push_str(&format_record(chunk.len() as u8, address, RECORD_TYPE_DATA, chunk));
    }
    out.push_str(&format_record(0, 0, RECORD_TYPE_EOF, &[]));
    out
}

/// A single decoded Intel HEX record, used by tests that round-trip
/// generated output back into bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: u16,
    pub record_type: u8,
    pub data: Vec<u8>,
}

/// Parses one `:`-prefixed line into a [`Record`]. Returns `None` for a
/// line that isn't a well-formed Intel HEX record (wrong length, bad
/// checksum, missing leading colon).
pub fn parse_record(line: &str) -> Option<Record> {
    let line = line.trim_end();
    let body = line.strip_prefix(':')?;
    if body.len() < 10 || body.len() % 2 != 0 {
        return None;
    }

    let bytes: Vec<u8> = (0..body.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&body[i..i + 2], 16))
        .collect::<Result<_, _>>()
        .ok()?;

    let count = bytes[0] as usize;
    if bytes.len() != count + 5 {
        return None;
    }
    let address = u16::from_be_bytes([bytes[1], bytes[2]]);
    let record_type = bytes[3];
    let data = bytes[4..4 + count].to_vec();
    let expected_checksum = *bytes.last().unwrap();

    if checksum(count as u8, address, record_type, &data) != expected_checksum {
        return None;
    }

    Some(Record { address, record_type, data })
}
