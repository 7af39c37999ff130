use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("failed to open {path}: {source}")]
    IoOpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    IoWriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("line {line}: label `{name}` is already defined")]
    DuplicateLabel { line: usize, name: String },

    #[error("line {line}: undefined label `{name}`")]
    UnknownLabel { line: usize, name: String },

    #[error("line {line}: invalid register operand `{text}`")]
    InvalidRegister { line: usize, text: String },

    #[error("line {line}: immediate {value} out of range for {mnemonic} (expected {expected})")]
    ImmediateOutOfRange {
        line: usize,
        mnemonic: String,
        value: i64,
        expected: String,
    },

    #[error("line {line}: branch offset {offset} out of range for {mnemonic} (expected {expected})")]
    BranchOffsetOutOfRange {
        line: usize,
        mnemonic: String,
        offset: i32,
        expected: String,
    },

    #[error("program too large: address 0x{pc:04x} exceeds the 0x8000 flash limit")]
    ProgramTooLarge { pc: u32 },
}
