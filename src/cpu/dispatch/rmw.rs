//! Shifts/rotates (ASL/LSR/ROL/ROR, accumulator and memory forms) and
//! increment/decrement (INC/DEC on memory, INX/DEX/INY/DEY on registers).

use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, dex, dey, inc_mem, inx, iny, lsr_acc, lsr_mem, rol_acc, rol_mem,
    ror_acc, ror_mem,
};
use crate::cpu::state::CpuState;
use crate::mmu::Mmu;

pub(crate) fn op_asl_acc(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    asl_acc(cpu);
    0
}

pub(crate) fn op_asl_mem(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    asl_mem(cpu, mmu, addr);
    0
}

pub(crate) fn op_lsr_acc(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    lsr_acc(cpu);
    0
}

pub(crate) fn op_lsr_mem(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    lsr_mem(cpu, mmu, addr);
    0
}

pub(crate) fn op_rol_acc(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    rol_acc(cpu);
    0
}

pub(crate) fn op_rol_mem(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    rol_mem(cpu, mmu, addr);
    0
}

pub(crate) fn op_ror_acc(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    ror_acc(cpu);
    0
}

pub(crate) fn op_ror_mem(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    ror_mem(cpu, mmu, addr);
    0
}

pub(crate) fn op_inc(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    inc_mem(cpu, mmu, addr);
    0
}

pub(crate) fn op_dec(cpu: &mut CpuState, mmu: &mut Mmu, addr: u16) -> u32 {
    dec_mem(cpu, mmu, addr);
    0
}

pub(crate) fn op_inx(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    inx(cpu);
    0
}

pub(crate) fn op_iny(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    iny(cpu);
    0
}

pub(crate) fn op_dex(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    dex(cpu);
    0
}

pub(crate) fn op_dey(cpu: &mut CpuState, _mmu: &mut Mmu, _operand: u16) -> u32 {
    dey(cpu);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CARRY;

    #[test]
    fn asl_accumulator_sets_carry_from_bit7() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        cpu.set_a(0x80);
        op_asl_acc(&mut cpu, &mut mmu, 0);
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.is_flag_set(CARRY));
        assert!(cpu.is_flag_set(crate::cpu::state::ZERO));
    }

    #[test]
    fn inc_mem_wraps() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        mmu.write_byte(0x20, 0xFF);
        op_inc(&mut cpu, &mut mmu, 0x20);
        assert_eq!(mmu.read_byte(0x20), 0x00);
        assert!(cpu.is_flag_set(crate::cpu::state::ZERO));
    }

    #[test]
    fn inx_wraps_at_256() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        cpu.set_x(0xFF);
        op_inx(&mut cpu, &mut mmu, 0);
        assert_eq!(cpu.x(), 0x00);
    }
}
