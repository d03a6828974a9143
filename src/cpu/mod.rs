//! Public façade for the 6502 CPU core: state, addressing, semantic
//! actions, the opcode table, and the fetch-decode-execute loop that ties
//! them together.
//!
//! ```
//! use mos6502::cpu::Cpu;
//! use mos6502::mmu::Mmu;
//!
//! let mut mmu = Mmu::new();
//! mmu.load_program(&[0xA9, 0x01, 0x00]); // LDA #$01; BRK
//! mmu.write_word(mos6502::mmu::RESET_VECTOR, 0x8000);
//! let mut cpu = Cpu::new(0);
//! cpu.reset(&mmu);
//! cpu.run(&mut mmu).unwrap();
//! assert_eq!(cpu.a(), 0x01);
//! ```

pub mod addressing;
pub(crate) mod cycles;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod regs;
pub mod state;
pub mod table;

use std::thread;
use std::time::{Duration, Instant};

use crate::error::CpuError;
use crate::mmu::Mmu;
use state::{BREAK, CpuState};
use table::decode;

/// The CPU: architectural state plus the loop-control extras (watched
/// addresses) that sit above the bare register/flag model in `state.rs`.
#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    watch_addresses: Vec<u16>,
}

impl Cpu {
    /// Construct a halted CPU targeting `clock_hz` (0 disables pacing).
    pub fn new(clock_hz: u64) -> Self {
        let mut state = CpuState::new();
        state.set_clock_hz(clock_hz);
        Self { state, watch_addresses: Vec::new() }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.state.set_debug(debug);
        self
    }

    pub fn with_watch_addresses(mut self, addrs: Vec<u16>) -> Self {
        self.watch_addresses = addrs;
        self
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.state.a()
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.state.x()
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.state.y()
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.state.sp()
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.state.pc()
    }
    #[inline]
    pub fn status(&self) -> u8 {
        self.state.status()
    }
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.state.cycles()
    }
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Bypass the reset vector, for harnesses that want to single-step from
    /// an arbitrary address. `reset` always reads `$FFFC/$FFFD`; this exists
    /// for callers that need to start execution somewhere else.
    pub fn set_pc(&mut self, pc: u16) {
        self.state.set_pc(pc);
    }

    /// Read the reset vector, reinitialize registers, and transition to
    /// `Running`.
    pub fn reset(&mut self, mmu: &Mmu) {
        self.state.reset(mmu);
        log::info!("cpu reset: pc=${:04X}", self.state.pc());
    }

    /// Execute exactly one instruction, returning the total cycles charged
    /// (base cycles plus any page-cross/branch penalties). Returns
    /// `CpuError::UndefinedOpcode` and leaves `running` cleared if the
    /// fetched byte has no descriptor.
    pub fn step(&mut self, mmu: &mut Mmu) -> Result<u32, CpuError> {
        let pc_at_fetch = self.state.pc();
        let opcode = self.state.fetch_u8(mmu);

        let instr = match decode(opcode) {
            Some(instr) => instr,
            None => {
                self.state.set_running(false);
                log::error!("undefined opcode ${opcode:02X} at PC=${pc_at_fetch:04X}");
                return Err(CpuError::UndefinedOpcode { pc: pc_at_fetch, opcode });
            }
        };

        let (operand, resolve_extra) = (instr.resolve)(&mut self.state, mmu);
        let action_extra = (instr.action)(&mut self.state, mmu, operand);
        let total = instr.base_cycles + resolve_extra + action_extra;
        self.state.add_cycles(total as u64);

        if self.state.debug() {
            let (rendered, _) = crate::disasm::disassemble_at(mmu, pc_at_fetch);
            log::trace!(
                "${pc_at_fetch:04X}: {rendered:<14}  A=${:02X} X=${:02X} Y=${:02X} SP=${:02X} P=${:02X} cyc={}",
                self.state.a(),
                self.state.x(),
                self.state.y(),
                self.state.sp(),
                self.state.status(),
                self.state.cycles(),
            );
        }

        if !self.watch_addresses.is_empty() {
            for &addr in &self.watch_addresses {
                log::debug!("watch ${addr:04X} = ${:02X}", mmu.read_byte(addr));
            }
        }

        if self.state.clock_hz() > 0 {
            let target = Duration::from_secs_f64(total as f64 / self.state.clock_hz() as f64);
            pace(target);
        }

        if self.state.is_flag_set(BREAK) {
            self.state.set_running(false);
            log::info!("halted on BRK at PC=${:04X}", self.state.pc());
        }

        Ok(total)
    }

    /// Run until `running` clears (BRK) or an undefined opcode is hit.
    pub fn run(&mut self, mmu: &mut Mmu) -> Result<(), CpuError> {
        while self.state.is_running() {
            self.step(mmu)?;
        }
        Ok(())
    }

    /// Run for at most `max_instructions`, ignoring clock pacing, and
    /// return `(instructions_executed, elapsed)` for a benchmark summary.
    pub fn run_benchmark(
        &mut self,
        mmu: &mut Mmu,
        max_instructions: u64,
    ) -> Result<(u64, Duration), CpuError> {
        let saved_clock = self.state.clock_hz();
        self.state.set_clock_hz(0);
        let start = Instant::now();
        let mut executed = 0u64;
        while self.state.is_running() && executed < max_instructions {
            self.step(mmu)?;
            executed += 1;
        }
        let elapsed = start.elapsed();
        self.state.set_clock_hz(saved_clock);
        Ok((executed, elapsed))
    }
}

/// Sleep for approximately `target`. A zero duration is a no-op rather than
/// an actual syscall, since most instructions at typical clock speeds pace
/// to durations too small for the OS scheduler to honor precisely anyway.
fn pace(target: Duration) {
    if !target.is_zero() {
        thread::sleep(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mmu::RESET_VECTOR;

    fn cpu_with_program(prg: &[u8]) -> (Cpu, Mmu) {
        let mut mmu = Mmu::new();
        mmu.load_program(prg);
        mmu.write_word(RESET_VECTOR, 0x8000);
        let mut cpu = Cpu::new(0);
        cpu.reset(&mmu);
        (cpu, mmu)
    }

    #[test]
    fn scenario_lda_adc_brk() {
        let (mut cpu, mut mmu) = cpu_with_program(&[0xA9, 0x01, 0x69, 0x01, 0x00]);
        cpu.run(&mut mmu).unwrap();
        assert_eq!(cpu.a(), 0x02);
        assert!(cpu.cycles() >= 2 + 2 + 7);
        assert!(!cpu.is_running());
    }

    #[test]
    fn scenario_decimal_adc() {
        let (mut cpu, mut mmu) = cpu_with_program(&[0xF8, 0xA9, 0x09, 0x18, 0x69, 0x01, 0x00]);
        cpu.run(&mut mmu).unwrap();
        assert_eq!(cpu.a(), 0x10);
        assert!(cpu.status() & state::DECIMAL != 0);
        // Deviates from a worked example in the distilled spec which claims
        // C=1 here; 9+1 does not carry out of the tens digit under correct
        // NMOS BCD arithmetic (see DESIGN.md).
        assert!(cpu.status() & state::CARRY == 0);
    }

    #[test]
    fn scenario_asl_of_0x80() {
        let (mut cpu, mut mmu) = cpu_with_program(&[0xA9, 0x80, 0x0A, 0x00]);
        cpu.run(&mut mmu).unwrap();
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.status() & state::CARRY != 0);
        assert!(cpu.status() & state::ZERO != 0);
        assert!(cpu.status() & state::NEGATIVE == 0);
    }

    #[test]
    fn scenario_store_and_load_roundtrip() {
        let (mut cpu, mut mmu) = cpu_with_program(&[
            0xA9, 0xFF, 0x8D, 0x00, 0x02, 0xAE, 0x00, 0x02, 0x8E, 0x00, 0x03, 0x00,
        ]);
        cpu.run(&mut mmu).unwrap();
        assert_eq!(mmu.read_byte(0x0200), 0xFF);
        assert_eq!(mmu.read_byte(0x0300), 0xFF);
        assert_eq!(cpu.x(), 0xFF);
    }

    #[test]
    fn scenario_indirect_jmp_page_wrap() {
        let mut mmu = Mmu::new();
        mmu.write_byte(0x02FF, 0x00);
        mmu.write_byte(0x0200, 0x80);
        mmu.load_at(0x8000, &[0x6C, 0xFF, 0x02]);
        mmu.write_word(RESET_VECTOR, 0x8000);
        let mut cpu = Cpu::new(0);
        cpu.reset(&mmu);
        cpu.step(&mut mmu).unwrap();
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn scenario_binary_adc_overflow() {
        let (mut cpu, mut mmu) = cpu_with_program(&[0xA9, 0x50, 0x69, 0x50, 0x00]);
        cpu.run(&mut mmu).unwrap();
        assert_eq!(cpu.a(), 0xA0);
        assert!(cpu.status() & state::OVERFLOW != 0);
        assert!(cpu.status() & state::NEGATIVE != 0);
        assert!(cpu.status() & state::CARRY == 0);
    }

    #[test]
    fn undefined_opcode_is_fatal() {
        let (mut cpu, mut mmu) = cpu_with_program(&[0x02]);
        let err = cpu.run(&mut mmu).unwrap_err();
        assert_eq!(err, CpuError::UndefinedOpcode { pc: 0x8000, opcode: 0x02 });
        assert!(!cpu.is_running());
    }

    #[test]
    fn watch_addresses_do_not_affect_execution() {
        let mut mmu = Mmu::new();
        mmu.load_program(&[0xA9, 0x7F, 0x00]);
        mmu.write_word(RESET_VECTOR, 0x8000);
        let mut cpu = Cpu::new(0).with_watch_addresses(vec![0x0000, 0x0001]);
        cpu.reset(&mmu);
        cpu.run(&mut mmu).unwrap();
        assert_eq!(cpu.a(), 0x7F);
    }
}
