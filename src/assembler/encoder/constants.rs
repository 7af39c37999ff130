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

// base opcodes, from the AVR instruction set bit-field layout
pub const NOP_OPCODE: u16 = 0x0000;
pub const RET_OPCODE: u16 = 0x9508;
pub const LDI_BASE_OPCODE: u16 = 0xE000;
pub const ADD_BASE_OPCODE: u16 = 0x0C00;
pub const SUB_BASE_OPCODE: u16 = 0x1800;
pub const CP_BASE_OPCODE: u16 = 0x1400;
pub const CLR_BASE_OPCODE: u16 = 0x2400;
pub const DEC_BASE_OPCODE: u16 = 0x940A;
pub const IN_BASE_OPCODE: u16 = 0xB000;
pub const OUT_BASE_OPCODE: u16 = 0xB800;
pub const LD_X_OPCODE: u16 = 0x900C;
pub const ST_X_OPCODE: u16 = 0x920C;
pub const RJMP_BASE_OPCODE: u16 = 0xC000;
pub const RCALL_BASE_OPCODE: u16 = 0xD000;
pub const BRNE_BASE_OPCODE: u16 = 0xF400;
pub const BRNE_LOW_BITS: u16 = 0b001;
pub const BRGE_LOW_BITS: u16 = 0b100;
pub const BRLT_LOW_BITS: u16 = 0b100;
pub const JMP_FIRST_WORD: u16 = 0x940C;
pub const CALL_FIRST_WORD: u16 = 0x940E;
