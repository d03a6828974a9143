#![doc = r#"
mos6502 — a MOS 6502 CPU core library.

This crate interprets a stream of 6502 opcodes against a flat 64 KiB memory
management unit, exposing a `Cpu` facade over the register/flag state, the
addressing-mode resolver, the opcode table, and the semantic actions that
back each instruction.

Modules:
- `mmu`: flat 64 KiB byte-addressable memory with the reset/IRQ vector
  constants and a program loader.
- `cpu`: the CPU facade (`Cpu`), architectural state (`cpu::state`), the
  addressing resolver (`cpu::addressing`), the opcode table
  (`cpu::table`), and the per-mnemonic-family semantic actions
  (`cpu::dispatch`, `cpu::execute`).
- `error`: `CpuError` (core) and `CliError` (harness) error types.
- `disasm`: renders a decoded opcode back into 6502 assembly syntax; used
  both by `Cpu::step`'s debug trace line and by the CLI's static listing.

Peripherals (PPU/APU/controllers/cartridge mappers) are out of scope for
this core; a caller that wants to drive the CPU only needs an `Mmu`.
"#]

pub mod cpu;
pub mod disasm;
pub mod error;
pub mod mmu;

pub use cpu::Cpu;
pub use error::{CliError, CpuError};
pub use mmu::Mmu;

#[cfg(test)]
pub mod test_utils;
