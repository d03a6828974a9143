//! Error types for the CPU core and the CLI harness.

use thiserror::Error;

/// Fatal errors that can terminate the fetch-decode-execute loop.
///
/// The core has exactly one recoverable-to-the-harness failure mode: an
/// undefined opcode byte. Every other condition (memory access, defined
/// opcode execution) always succeeds per the data model's invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("undefined opcode ${opcode:02X} at PC=${pc:04X}")]
    UndefinedOpcode { pc: u16, opcode: u8 },
}

/// Errors reported by the command-line harness before (or instead of)
/// handing control to the core loop. These never originate inside the CPU.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no program file given: pass --file <path> or --benchmark")]
    MissingFile,

    #[error("failed to read program file {path}: {source}")]
    ProgramRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid clock speed {0:?}: must be a positive number of MHz")]
    InvalidClockSpeed(String),

    #[error("invalid watch address {0:?}: expected a decimal or $hex/0x-prefixed literal")]
    InvalidWatchAddress(String),

    #[error("invalid benchmark instruction count {0:?}: must be a positive integer")]
    InvalidBenchmarkCount(String),

    #[error("program image is {0} bytes, which does not fit before the reset/IRQ vectors at $FFFC")]
    ProgramTooLarge(usize),

    #[error(transparent)]
    Cpu(#[from] CpuError),
}
