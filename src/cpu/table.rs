//! The opcode table: a dense-by-construction mapping from opcode byte to an
//! immutable [`Instruction`] descriptor. `decode` is a single exhaustive
//! `match` rather than a literal `[Option<Instruction>; 256]` array — the two are
//! behaviorally identical (every byte either decodes to exactly one
//! descriptor or to `None`) and a match keeps each opcode's mnemonic,
//! mode, cycle count, resolver, and action side by side instead of spread
//! across a separate builder function.

use crate::cpu::addressing::{self, AddressingMode};
use crate::cpu::cycles::base_cycles;
use crate::cpu::dispatch::{arithmetic, branches, compare, control_flow, load_store, logical, misc, rmw};
use crate::cpu::state::CpuState;
use crate::mmu::Mmu;

/// `(operand, extra_cycles)` — extra_cycles covers the addressing-mode page
/// cross penalty; the resolver charges it, never the action.
pub(crate) type Resolve = fn(&mut CpuState, &Mmu) -> (u16, u32);
/// Extra cycles returned here cover branch-taken/page-cross penalties only.
pub(crate) type Action = fn(&mut CpuState, &mut Mmu, u16) -> u32;

#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub length: u8,
    pub base_cycles: u32,
    pub(crate) resolve: Resolve,
    pub(crate) action: Action,
}

macro_rules! resolver {
    ($name:ident, $f:path) => {
        fn $name(cpu: &mut CpuState, mmu: &Mmu) -> (u16, u32) {
            ($f(cpu, mmu), 0)
        }
    };
}

resolver!(r_implied, addressing::addr_implied::<CpuState>);
resolver!(r_accumulator, addressing::addr_accumulator::<CpuState>);
resolver!(r_immediate, addressing::addr_immediate::<CpuState>);
resolver!(r_zp, addressing::addr_zp::<CpuState>);
resolver!(r_zp_x, addressing::addr_zp_x::<CpuState>);
resolver!(r_zp_y, addressing::addr_zp_y::<CpuState>);
resolver!(r_relative, addressing::addr_relative::<CpuState>);
resolver!(r_abs, addressing::addr_abs::<CpuState>);
resolver!(r_abs_x, addressing::addr_abs_x::<CpuState>);
resolver!(r_abs_y, addressing::addr_abs_y::<CpuState>);
resolver!(r_indirect, addressing::addr_indirect::<CpuState>);
resolver!(r_ind_x, addressing::addr_ind_x::<CpuState>);
resolver!(r_ind_y, addressing::addr_ind_y::<CpuState>);

fn r_abs_x_pc(cpu: &mut CpuState, mmu: &Mmu) -> (u16, u32) {
    let (addr, crossed) = addressing::addr_abs_x_pc::<CpuState>(cpu, mmu);
    (addr, crossed as u32)
}

fn r_abs_y_pc(cpu: &mut CpuState, mmu: &Mmu) -> (u16, u32) {
    let (addr, crossed) = addressing::addr_abs_y_pc::<CpuState>(cpu, mmu);
    (addr, crossed as u32)
}

fn r_ind_y_pc(cpu: &mut CpuState, mmu: &Mmu) -> (u16, u32) {
    let (addr, crossed) = addressing::addr_ind_y_pc::<CpuState>(cpu, mmu);
    (addr, crossed as u32)
}

macro_rules! instr {
    ($mnemonic:expr, $mode:ident, $len:expr, $op:expr, $resolve:expr, $action:expr) => {
        Instruction {
            mnemonic: $mnemonic,
            mode: AddressingMode::$mode,
            length: $len,
            base_cycles: base_cycles($op),
            resolve: $resolve,
            action: $action,
        }
    };
}

/// Decode a single opcode byte into its instruction descriptor. Returns
/// `None` for the undocumented/illegal bytes this core does not implement —
/// encountering one at runtime is the core's one fatal error. Public so the
/// CLI-layer disassembler can render instructions without duplicating the
/// opcode table.
pub fn decode(op: u8) -> Option<Instruction> {
    use load_store::*;
    Some(match op {
        // ---- LDA ----
        0xA9 => instr!("LDA", Immediate, 2, op, r_immediate, op_lda),
        0xA5 => instr!("LDA", ZeroPage, 2, op, r_zp, op_lda),
        0xB5 => instr!("LDA", ZeroPageX, 2, op, r_zp_x, op_lda),
        0xAD => instr!("LDA", Absolute, 3, op, r_abs, op_lda),
        0xBD => instr!("LDA", AbsoluteX, 3, op, r_abs_x_pc, op_lda),
        0xB9 => instr!("LDA", AbsoluteY, 3, op, r_abs_y_pc, op_lda),
        0xA1 => instr!("LDA", IndirectX, 2, op, r_ind_x, op_lda),
        0xB1 => instr!("LDA", IndirectY, 2, op, r_ind_y_pc, op_lda),

        // ---- LDX ----
        0xA2 => instr!("LDX", Immediate, 2, op, r_immediate, op_ldx),
        0xA6 => instr!("LDX", ZeroPage, 2, op, r_zp, op_ldx),
        0xB6 => instr!("LDX", ZeroPageY, 2, op, r_zp_y, op_ldx),
        0xAE => instr!("LDX", Absolute, 3, op, r_abs, op_ldx),
        0xBE => instr!("LDX", AbsoluteY, 3, op, r_abs_y_pc, op_ldx),

        // ---- LDY ----
        0xA0 => instr!("LDY", Immediate, 2, op, r_immediate, op_ldy),
        0xA4 => instr!("LDY", ZeroPage, 2, op, r_zp, op_ldy),
        0xB4 => instr!("LDY", ZeroPageX, 2, op, r_zp_x, op_ldy),
        0xAC => instr!("LDY", Absolute, 3, op, r_abs, op_ldy),
        0xBC => instr!("LDY", AbsoluteX, 3, op, r_abs_x_pc, op_ldy),

        // ---- STA ----
        0x85 => instr!("STA", ZeroPage, 2, op, r_zp, op_sta),
        0x95 => instr!("STA", ZeroPageX, 2, op, r_zp_x, op_sta),
        0x8D => instr!("STA", Absolute, 3, op, r_abs, op_sta),
        0x9D => instr!("STA", AbsoluteX, 3, op, r_abs_x, op_sta),
        0x99 => instr!("STA", AbsoluteY, 3, op, r_abs_y, op_sta),
        0x81 => instr!("STA", IndirectX, 2, op, r_ind_x, op_sta),
        0x91 => instr!("STA", IndirectY, 2, op, r_ind_y, op_sta),

        // ---- STX / STY ----
        0x86 => instr!("STX", ZeroPage, 2, op, r_zp, op_stx),
        0x96 => instr!("STX", ZeroPageY, 2, op, r_zp_y, op_stx),
        0x8E => instr!("STX", Absolute, 3, op, r_abs, op_stx),
        0x84 => instr!("STY", ZeroPage, 2, op, r_zp, op_sty),
        0x94 => instr!("STY", ZeroPageX, 2, op, r_zp_x, op_sty),
        0x8C => instr!("STY", Absolute, 3, op, r_abs, op_sty),

        // ---- Transfers ----
        0xAA => instr!("TAX", Implied, 1, op, r_implied, op_tax),
        0xA8 => instr!("TAY", Implied, 1, op, r_implied, op_tay),
        0x8A => instr!("TXA", Implied, 1, op, r_implied, op_txa),
        0x98 => instr!("TYA", Implied, 1, op, r_implied, op_tya),
        0xBA => instr!("TSX", Implied, 1, op, r_implied, op_tsx),
        0x9A => instr!("TXS", Implied, 1, op, r_implied, op_txs),

        // ---- Stack ----
        0x48 => instr!("PHA", Implied, 1, op, r_implied, op_pha),
        0x08 => instr!("PHP", Implied, 1, op, r_implied, op_php),
        0x68 => instr!("PLA", Implied, 1, op, r_implied, op_pla),
        0x28 => instr!("PLP", Implied, 1, op, r_implied, op_plp),

        // ---- INC/DEC memory, INX/DEX/INY/DEY ----
        0xE6 => instr!("INC", ZeroPage, 2, op, r_zp, rmw::op_inc),
        0xF6 => instr!("INC", ZeroPageX, 2, op, r_zp_x, rmw::op_inc),
        0xEE => instr!("INC", Absolute, 3, op, r_abs, rmw::op_inc),
        0xFE => instr!("INC", AbsoluteX, 3, op, r_abs_x, rmw::op_inc),
        0xC6 => instr!("DEC", ZeroPage, 2, op, r_zp, rmw::op_dec),
        0xD6 => instr!("DEC", ZeroPageX, 2, op, r_zp_x, rmw::op_dec),
        0xCE => instr!("DEC", Absolute, 3, op, r_abs, rmw::op_dec),
        0xDE => instr!("DEC", AbsoluteX, 3, op, r_abs_x, rmw::op_dec),
        0xE8 => instr!("INX", Implied, 1, op, r_implied, rmw::op_inx),
        0xC8 => instr!("INY", Implied, 1, op, r_implied, rmw::op_iny),
        0xCA => instr!("DEX", Implied, 1, op, r_implied, rmw::op_dex),
        0x88 => instr!("DEY", Implied, 1, op, r_implied, rmw::op_dey),

        // ---- AND ----
        0x29 => instr!("AND", Immediate, 2, op, r_immediate, logical::op_and),
        0x25 => instr!("AND", ZeroPage, 2, op, r_zp, logical::op_and),
        0x35 => instr!("AND", ZeroPageX, 2, op, r_zp_x, logical::op_and),
        0x2D => instr!("AND", Absolute, 3, op, r_abs, logical::op_and),
        0x3D => instr!("AND", AbsoluteX, 3, op, r_abs_x_pc, logical::op_and),
        0x39 => instr!("AND", AbsoluteY, 3, op, r_abs_y_pc, logical::op_and),
        0x21 => instr!("AND", IndirectX, 2, op, r_ind_x, logical::op_and),
        0x31 => instr!("AND", IndirectY, 2, op, r_ind_y_pc, logical::op_and),

        // ---- ORA ----
        0x09 => instr!("ORA", Immediate, 2, op, r_immediate, logical::op_ora),
        0x05 => instr!("ORA", ZeroPage, 2, op, r_zp, logical::op_ora),
        0x15 => instr!("ORA", ZeroPageX, 2, op, r_zp_x, logical::op_ora),
        0x0D => instr!("ORA", Absolute, 3, op, r_abs, logical::op_ora),
        0x1D => instr!("ORA", AbsoluteX, 3, op, r_abs_x_pc, logical::op_ora),
        0x19 => instr!("ORA", AbsoluteY, 3, op, r_abs_y_pc, logical::op_ora),
        0x01 => instr!("ORA", IndirectX, 2, op, r_ind_x, logical::op_ora),
        0x11 => instr!("ORA", IndirectY, 2, op, r_ind_y_pc, logical::op_ora),

        // ---- EOR ----
        0x49 => instr!("EOR", Immediate, 2, op, r_immediate, logical::op_eor),
        0x45 => instr!("EOR", ZeroPage, 2, op, r_zp, logical::op_eor),
        0x55 => instr!("EOR", ZeroPageX, 2, op, r_zp_x, logical::op_eor),
        0x4D => instr!("EOR", Absolute, 3, op, r_abs, logical::op_eor),
        0x5D => instr!("EOR", AbsoluteX, 3, op, r_abs_x_pc, logical::op_eor),
        0x59 => instr!("EOR", AbsoluteY, 3, op, r_abs_y_pc, logical::op_eor),
        0x41 => instr!("EOR", IndirectX, 2, op, r_ind_x, logical::op_eor),
        0x51 => instr!("EOR", IndirectY, 2, op, r_ind_y_pc, logical::op_eor),

        // ---- BIT ----
        0x24 => instr!("BIT", ZeroPage, 2, op, r_zp, logical::op_bit),
        0x2C => instr!("BIT", Absolute, 3, op, r_abs, logical::op_bit),

        // ---- ASL ----
        0x0A => instr!("ASL", Accumulator, 1, op, r_accumulator, rmw::op_asl_acc),
        0x06 => instr!("ASL", ZeroPage, 2, op, r_zp, rmw::op_asl_mem),
        0x16 => instr!("ASL", ZeroPageX, 2, op, r_zp_x, rmw::op_asl_mem),
        0x0E => instr!("ASL", Absolute, 3, op, r_abs, rmw::op_asl_mem),
        0x1E => instr!("ASL", AbsoluteX, 3, op, r_abs_x, rmw::op_asl_mem),

        // ---- LSR ----
        0x4A => instr!("LSR", Accumulator, 1, op, r_accumulator, rmw::op_lsr_acc),
        0x46 => instr!("LSR", ZeroPage, 2, op, r_zp, rmw::op_lsr_mem),
        0x56 => instr!("LSR", ZeroPageX, 2, op, r_zp_x, rmw::op_lsr_mem),
        0x4E => instr!("LSR", Absolute, 3, op, r_abs, rmw::op_lsr_mem),
        0x5E => instr!("LSR", AbsoluteX, 3, op, r_abs_x, rmw::op_lsr_mem),

        // ---- ROL ----
        0x2A => instr!("ROL", Accumulator, 1, op, r_accumulator, rmw::op_rol_acc),
        0x26 => instr!("ROL", ZeroPage, 2, op, r_zp, rmw::op_rol_mem),
        0x36 => instr!("ROL", ZeroPageX, 2, op, r_zp_x, rmw::op_rol_mem),
        0x2E => instr!("ROL", Absolute, 3, op, r_abs, rmw::op_rol_mem),
        0x3E => instr!("ROL", AbsoluteX, 3, op, r_abs_x, rmw::op_rol_mem),

        // ---- ROR ----
        0x6A => instr!("ROR", Accumulator, 1, op, r_accumulator, rmw::op_ror_acc),
        0x66 => instr!("ROR", ZeroPage, 2, op, r_zp, rmw::op_ror_mem),
        0x76 => instr!("ROR", ZeroPageX, 2, op, r_zp_x, rmw::op_ror_mem),
        0x6E => instr!("ROR", Absolute, 3, op, r_abs, rmw::op_ror_mem),
        0x7E => instr!("ROR", AbsoluteX, 3, op, r_abs_x, rmw::op_ror_mem),

        // ---- Flags ----
        0x18 => instr!("CLC", Implied, 1, op, r_implied, misc::op_clc),
        0x38 => instr!("SEC", Implied, 1, op, r_implied, misc::op_sec),
        0x58 => instr!("CLI", Implied, 1, op, r_implied, misc::op_cli),
        0x78 => instr!("SEI", Implied, 1, op, r_implied, misc::op_sei),
        0xD8 => instr!("CLD", Implied, 1, op, r_implied, misc::op_cld),
        0xF8 => instr!("SED", Implied, 1, op, r_implied, misc::op_sed),
        0xB8 => instr!("CLV", Implied, 1, op, r_implied, misc::op_clv),

        // ---- Compare ----
        0xC9 => instr!("CMP", Immediate, 2, op, r_immediate, compare::op_cmp),
        0xC5 => instr!("CMP", ZeroPage, 2, op, r_zp, compare::op_cmp),
        0xD5 => instr!("CMP", ZeroPageX, 2, op, r_zp_x, compare::op_cmp),
        0xCD => instr!("CMP", Absolute, 3, op, r_abs, compare::op_cmp),
        0xDD => instr!("CMP", AbsoluteX, 3, op, r_abs_x_pc, compare::op_cmp),
        0xD9 => instr!("CMP", AbsoluteY, 3, op, r_abs_y_pc, compare::op_cmp),
        0xC1 => instr!("CMP", IndirectX, 2, op, r_ind_x, compare::op_cmp),
        0xD1 => instr!("CMP", IndirectY, 2, op, r_ind_y_pc, compare::op_cmp),
        0xE0 => instr!("CPX", Immediate, 2, op, r_immediate, compare::op_cpx),
        0xE4 => instr!("CPX", ZeroPage, 2, op, r_zp, compare::op_cpx),
        0xEC => instr!("CPX", Absolute, 3, op, r_abs, compare::op_cpx),
        0xC0 => instr!("CPY", Immediate, 2, op, r_immediate, compare::op_cpy),
        0xC4 => instr!("CPY", ZeroPage, 2, op, r_zp, compare::op_cpy),
        0xCC => instr!("CPY", Absolute, 3, op, r_abs, compare::op_cpy),

        // ---- Branches ----
        0x10 => instr!("BPL", Relative, 2, op, r_relative, branches::op_bpl),
        0x30 => instr!("BMI", Relative, 2, op, r_relative, branches::op_bmi),
        0x50 => instr!("BVC", Relative, 2, op, r_relative, branches::op_bvc),
        0x70 => instr!("BVS", Relative, 2, op, r_relative, branches::op_bvs),
        0x90 => instr!("BCC", Relative, 2, op, r_relative, branches::op_bcc),
        0xB0 => instr!("BCS", Relative, 2, op, r_relative, branches::op_bcs),
        0xD0 => instr!("BNE", Relative, 2, op, r_relative, branches::op_bne),
        0xF0 => instr!("BEQ", Relative, 2, op, r_relative, branches::op_beq),

        // ---- Jumps / Calls / Returns ----
        0x4C => instr!("JMP", Absolute, 3, op, r_abs, control_flow::op_jmp),
        0x6C => instr!("JMP", Indirect, 3, op, r_indirect, control_flow::op_jmp),
        0x20 => instr!("JSR", Absolute, 3, op, r_abs, control_flow::op_jsr),
        0x60 => instr!("RTS", Implied, 1, op, r_implied, control_flow::op_rts),

        // ---- ADC ----
        0x69 => instr!("ADC", Immediate, 2, op, r_immediate, arithmetic::op_adc),
        0x65 => instr!("ADC", ZeroPage, 2, op, r_zp, arithmetic::op_adc),
        0x75 => instr!("ADC", ZeroPageX, 2, op, r_zp_x, arithmetic::op_adc),
        0x6D => instr!("ADC", Absolute, 3, op, r_abs, arithmetic::op_adc),
        0x7D => instr!("ADC", AbsoluteX, 3, op, r_abs_x_pc, arithmetic::op_adc),
        0x79 => instr!("ADC", AbsoluteY, 3, op, r_abs_y_pc, arithmetic::op_adc),
        0x61 => instr!("ADC", IndirectX, 2, op, r_ind_x, arithmetic::op_adc),
        0x71 => instr!("ADC", IndirectY, 2, op, r_ind_y_pc, arithmetic::op_adc),

        // ---- SBC ----
        0xE9 => instr!("SBC", Immediate, 2, op, r_immediate, arithmetic::op_sbc),
        0xE5 => instr!("SBC", ZeroPage, 2, op, r_zp, arithmetic::op_sbc),
        0xF5 => instr!("SBC", ZeroPageX, 2, op, r_zp_x, arithmetic::op_sbc),
        0xED => instr!("SBC", Absolute, 3, op, r_abs, arithmetic::op_sbc),
        0xFD => instr!("SBC", AbsoluteX, 3, op, r_abs_x_pc, arithmetic::op_sbc),
        0xF9 => instr!("SBC", AbsoluteY, 3, op, r_abs_y_pc, arithmetic::op_sbc),
        0xE1 => instr!("SBC", IndirectX, 2, op, r_ind_x, arithmetic::op_sbc),
        0xF1 => instr!("SBC", IndirectY, 2, op, r_ind_y_pc, arithmetic::op_sbc),

        // ---- Interrupts / NOP ----
        0x00 => instr!("BRK", Implied, 1, op, r_implied, control_flow::op_brk),
        0x40 => instr!("RTI", Implied, 1, op, r_implied, control_flow::op_rti),
        0xEA => instr!("NOP", Implied, 1, op, r_implied, misc::op_nop),

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_opcode_count_matches_spec() {
        let count = (0u16..=255).filter(|&op| decode(op as u8).is_some()).count();
        assert_eq!(count, 151);
    }

    #[test]
    fn undefined_opcode_decodes_to_none() {
        assert!(decode(0x02).is_none());
        assert!(decode(0xFF).is_none());
    }

    #[test]
    fn lda_immediate_descriptor_fields() {
        let d = decode(0xA9).unwrap();
        assert_eq!(d.mnemonic, "LDA");
        assert_eq!(d.mode, AddressingMode::Immediate);
        assert_eq!(d.length, 2);
        assert_eq!(d.base_cycles, 2);
    }

    #[test]
    fn brk_descriptor_is_seven_cycles() {
        let d = decode(0x00).unwrap();
        assert_eq!(d.mnemonic, "BRK");
        assert_eq!(d.base_cycles, 7);
    }
}
