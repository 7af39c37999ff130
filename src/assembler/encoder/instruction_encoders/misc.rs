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

pub fn encode_nop() -> Vec<u8> {
    opcode_bytes(NOP_OPCODE).to_vec()
}

pub fn encode_ret() -> Vec<u8> {
    opcode_bytes(RET_OPCODE).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nop_and_ret_match_spec_example() {
        // NOP followed by RET -> 00 00 08 95
        let mut bytes = encode_nop();
        bytes.extend(encode_ret());
        assert_eq!(bytes, vec![0x00, 0x00, 0x08, 0x95]);
    }
}
