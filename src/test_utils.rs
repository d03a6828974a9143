//! Shared test scaffolding, mirroring the `build_nrom_with_prg`-plus-`setup`
//! pattern this codebase's own dispatch-family tests use, minus the
//! cartridge/mapper machinery that pattern needed for an NES target.

use crate::cpu::Cpu;
use crate::mmu::{Mmu, RESET_VECTOR};

/// Load `prg` at `$8000`, seed the reset vector to point there, and return a
/// reset `Cpu`/`Mmu` pair ready to single-step.
pub fn cpu_with_program(prg: &[u8]) -> (Cpu, Mmu) {
    let mut mmu = Mmu::new();
    mmu.load_program(prg);
    mmu.write_word(RESET_VECTOR, 0x8000);
    let mut cpu = Cpu::new(0);
    cpu.reset(&mmu);
    (cpu, mmu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_with_program_is_ready_to_step() {
        let (cpu, _mmu) = cpu_with_program(&[0xEA, 0x00]);
        assert_eq!(cpu.pc(), 0x8000);
        assert!(cpu.is_running());
    }
}
