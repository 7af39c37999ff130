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
use std::collections::HashMap;

/// Label name -> byte address, populated only during the first pass and
/// read-only for the rest of the run.
pub type SymbolTable = HashMap<String, u32>;

pub fn get_symbol(symbol_table: &SymbolTable, name: &str, line: usize) -> Result<u32, AssemblyError> {
    symbol_table
        .get(name)
        .copied()
        .ok_or_else(|| AssemblyError::UnknownLabel {
            line,
            name: name.to_string(),
        })
}
