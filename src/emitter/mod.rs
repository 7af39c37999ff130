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

pub mod intel_hex;

use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::AssemblyError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Bin,
    Hex,
}

/// Writes `bytes` to `path` in the requested format, via a temp file in
/// the same directory persisted over the final path. A failure partway
/// through rendering or writing never leaves a partial file at `path`.
pub fn write_output(path: &Path, bytes: &[u8], mode: OutputMode) -> Result<(), AssemblyError> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut temp = match parent {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new(),
    }
    .map_err(|source| AssemblyError::IoWriteFailed {
        path: path.display().to_string(),
        source,
    })?;

    let write_result = match mode {
        OutputMode::Bin => temp.write_all(bytes),
        OutputMode::Hex => temp.write_all(intel_hex::render(bytes).as_bytes()),
    };
    write_result.map_err(|source| AssemblyError::IoWriteFailed {
        path: path.display().to_string(),
        source,
    })?;

    temp.persist(path)
        .map_err(|e| AssemblyError::IoWriteFailed {
            path: path.display().to_string(),
            source: e.error,
        })?;

    Ok(())
}
