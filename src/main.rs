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

use std::path::PathBuf;

use anyhow::Result;
use avrasm::emitter::OutputMode;
use avrasm::file_reader::AsmFileReader;
use avrasm::run;
use clap::{Parser as ClapParser, ValueEnum};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Bin,
    Hex,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Bin => OutputMode::Bin,
            Mode::Hex => OutputMode::Hex,
        }
    }
}

/// Two-pass assembler for a small ATmega328 instruction subset.
#[derive(ClapParser)]
#[clap(version, author = "Connor Nolan")]
struct Opts {
    /// Path to the assembly source file.
    #[clap(short, long)]
    input: PathBuf,

    /// Path to write the assembled output to.
    #[clap(short, long)]
    output: PathBuf,

    /// Output format: raw binary or Intel HEX.
    #[clap(short, long, value_enum, default_value_t = Mode::Bin)]
    mode: Mode,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let reader = AsmFileReader;

    run(&opts.input, &opts.output, opts.mode.into(), &reader)?;

    println!(
        "Successfully assembled {} to {}",
        opts.input.display(),
        opts.output.display()
    );

    Ok(())
}
