//! LDA/LDX/LDY, STA/STX/STY, register transfers, and the stack opcodes
//! (PHA/PHP/PLA/PLP). Every action here has the uniform
//! `fn(&mut CpuState, &mut Mmu, u16) -> u32` signature used by
//! [`crate::cpu::table::Instruction`]; all return `0` extra cycles since none
//! of this family charges anything beyond the descriptor's `base_cycles`
//! (page-cross penalties for the load/store addressing modes are charged by
//! the resolver, not here).

use crate::cpu::execute::{lda, ldx, ldy, pha, php, pla, plp, tax, tay, tsx, txa, txs, tya};
use crate::cpu::state::CpuState;
use crate::mmu::Mmu;

pub(crate) fn op_lda(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    let v = mmu.read_byte(addr);
    lda(cpu, v);
    0
}

pub(crate) fn op_ldx(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    let v = mmu.read_byte(addr);
    ldx(cpu, v);
    0
}

pub(crate) fn op_ldy(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    let v = mmu.read_byte(addr);
    ldy(cpu, v);
    0
}

pub(crate) fn op_sta(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    mmu.write_byte(addr, cpu.a());
    0
}

pub(crate) fn op_stx(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    mmu.write_byte(addr, cpu.x());
    0
}

pub(crate) fn op_sty(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    mmu.write_byte(addr, cpu.y());
    0
}

pub(crate) fn op_tax(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    tax(cpu);
    0
}

pub(crate) fn op_tay(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    tay(cpu);
    0
}

pub(crate) fn op_txa(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    txa(cpu);
    0
}

pub(crate) fn op_tya(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    tya(cpu);
    0
}

pub(crate) fn op_tsx(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    tsx(cpu);
    0
}

pub(crate) fn op_txs(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    txs(cpu);
    0
}

pub(crate) fn op_pha(cpu: &mut CpuState, mmu: &mut Mmu, _operand: u16) -> u32 {
    pha(cpu, mmu);
    0
}

pub(crate) fn op_php(cpu: &mut CpuState, mmu: &mut Mmu, _operand: u16) -> u32 {
    php(cpu, mmu);
    0
}

pub(crate) fn op_pla(cpu: &mut CpuState, mmu: &mut Mmu, _operand: u16) -> u32 {
    pla(cpu, mmu);
    0
}

pub(crate) fn op_plp(cpu: &mut CpuState, mmu: &mut Mmu, _operand: u16) -> u32 {
    plp(cpu, mmu);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lda_sets_flags() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        mmu.write_byte(0x10, 0x00);
        op_lda(&mut cpu, &mut mmu, 0x10);
        assert_eq!(cpu.a(), 0);
        assert!(cpu.is_flag_set(crate::cpu::state::ZERO));
    }

    #[test]
    fn sta_writes_accumulator() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        cpu.set_a(0x7F);
        op_sta(&mut cpu, &mut mmu, 0x0200);
        assert_eq!(mmu.read_byte(0x0200), 0x7F);
    }

    #[test]
    fn pha_pla_round_trip() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        cpu.set_sp(0xFD);
        cpu.set_a(0x42);
        op_pha(&mut cpu, &mut mmu, 0);
        cpu.set_a(0x00);
        op_pla(&mut cpu, &mut mmu, 0);
        assert_eq!(cpu.a(), 0x42);
    }

    #[test]
    fn php_plp_restores_low_flags() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        cpu.set_sp(0xFD);
        cpu.set_status(crate::cpu::state::CARRY | crate::cpu::state::ZERO);
        let before = cpu.status();
        op_php(&mut cpu, &mut mmu, 0);
        cpu.set_status(0);
        op_plp(&mut cpu, &mut mmu, 0);
        assert_eq!(cpu.status() & 0x3F, before & 0x3F);
    }
}
