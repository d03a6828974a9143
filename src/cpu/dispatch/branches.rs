//! Conditional relative branches: BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ.
//!
//! The addressing resolver (Relative mode) always computes the branch
//! target and advances PC past the displacement byte; these handlers decide
//! whether the flag test passes and, if so, report the extra cycle(s) for
//! "taken" (+1) and "taken with page cross" (+1 more).

use crate::cpu::execute::{branch_to, get_flag};
use crate::cpu::state::{CARRY, CpuState, NEGATIVE, OVERFLOW, ZERO};
use crate::mmu::Mmu;

fn branch_if(cpu: &mut CpuState, target: u16, take: bool) -> u32 {
    branch_to(cpu, target, take)
}

pub(crate) fn op_bpl(cpu: &mut CpuState, _mmu: &mut Mmu, target: u16) -> u32 {
    let take = !get_flag(cpu, NEGATIVE);
    branch_if(cpu, target, take)
}

pub(crate) fn op_bmi(cpu: &mut CpuState, _mmu: &mut Mmu, target: u16) -> u32 {
    let take = get_flag(cpu, NEGATIVE);
    branch_if(cpu, target, take)
}

pub(crate) fn op_bvc(cpu: &mut CpuState, _mmu: &mut Mmu, target: u16) -> u32 {
    let take = !get_flag(cpu, OVERFLOW);
    branch_if(cpu, target, take)
}

pub(crate) fn op_bvs(cpu: &mut CpuState, _mmu: &mut Mmu, target: u16) -> u32 {
    let take = get_flag(cpu, OVERFLOW);
    branch_if(cpu, target, take)
}

pub(crate) fn op_bcc(cpu: &mut CpuState, _mmu: &mut Mmu, target: u16) -> u32 {
    let take = !get_flag(cpu, CARRY);
    branch_if(cpu, target, take)
}

pub(crate) fn op_bcs(cpu: &mut CpuState, _mmu: &mut Mmu, target: u16) -> u32 {
    let take = get_flag(cpu, CARRY);
    branch_if(cpu, target, take)
}

pub(crate) fn op_bne(cpu: &mut CpuState, _mmu: &mut Mmu, target: u16) -> u32 {
    let take = !get_flag(cpu, ZERO);
    branch_if(cpu, target, take)
}

pub(crate) fn op_beq(cpu: &mut CpuState, _mmu: &mut Mmu, target: u16) -> u32 {
    let take = get_flag(cpu, ZERO);
    branch_if(cpu, target, take)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beq_taken_when_zero_set() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        cpu.assign_flag(ZERO, true);
        cpu.set_pc(0x8010);
        let extra = op_beq(&mut cpu, &mut mmu, 0x8020);
        assert_eq!(extra, 1);
        assert_eq!(cpu.pc(), 0x8020);
    }

    #[test]
    fn bne_not_taken_when_zero_set() {
        let mut cpu = CpuState::new();
        let mut mmu = Mmu::new();
        cpu.assign_flag(ZERO, true);
        cpu.set_pc(0x8010);
        let extra = op_bne(&mut cpu, &mut mmu, 0x8020);
        assert_eq!(extra, 0);
        assert_eq!(cpu.pc(), 0x8010);
    }
}
