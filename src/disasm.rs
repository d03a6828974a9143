//! Renders a decoded opcode back into 6502 assembly syntax. Lives in the
//! core library (not just the CLI binary) because `Cpu::step`'s per-
//! instruction debug trace needs the same rendering the CLI's static
//! listing uses — both must show the mnemonic with its operand rendered
//! per addressing mode, not a raw resolved address.

use crate::Mmu;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::table::decode;

/// Disassemble the instruction at `pc`. Returns the rendered text and the
/// instruction's total length in bytes (opcode + operand), so callers can
/// advance `pc` without re-decoding.
pub fn disassemble_at(mmu: &Mmu, pc: u16) -> (String, u8) {
    let opcode = mmu.read_byte(pc);
    let Some(instr) = decode(opcode) else {
        return (format!(".byte ${opcode:02X}"), 1);
    };

    let operand_text = match instr.mode {
        AddressingMode::Implied => String::new(),
        AddressingMode::Accumulator => "A".to_string(),
        AddressingMode::Immediate => format!("#${:02X}", mmu.read_byte(pc.wrapping_add(1))),
        AddressingMode::ZeroPage => format!("${:02X}", mmu.read_byte(pc.wrapping_add(1))),
        AddressingMode::ZeroPageX => format!("${:02X},X", mmu.read_byte(pc.wrapping_add(1))),
        AddressingMode::ZeroPageY => format!("${:02X},Y", mmu.read_byte(pc.wrapping_add(1))),
        AddressingMode::Relative => {
            let offset = mmu.read_byte(pc.wrapping_add(1)) as i8;
            let target = pc.wrapping_add(2).wrapping_add(offset as i16 as u16);
            format!("${target:04X}")
        }
        AddressingMode::Absolute => format!("${:04X}", read_operand_word(mmu, pc)),
        AddressingMode::AbsoluteX => format!("${:04X},X", read_operand_word(mmu, pc)),
        AddressingMode::AbsoluteY => format!("${:04X},Y", read_operand_word(mmu, pc)),
        AddressingMode::Indirect => format!("(${:04X})", read_operand_word(mmu, pc)),
        AddressingMode::IndirectX => format!("(${:02X},X)", mmu.read_byte(pc.wrapping_add(1))),
        AddressingMode::IndirectY => format!("(${:02X}),Y", mmu.read_byte(pc.wrapping_add(1))),
    };

    let text = if operand_text.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand_text)
    };
    (text, instr.length)
}

fn read_operand_word(mmu: &Mmu, pc: u16) -> u16 {
    let lo = mmu.read_byte(pc.wrapping_add(1)) as u16;
    let hi = mmu.read_byte(pc.wrapping_add(2)) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_immediate_lda() {
        let mut mmu = Mmu::new();
        mmu.load_at(0x8000, &[0xA9, 0x01]);
        let (text, len) = disassemble_at(&mmu, 0x8000);
        assert_eq!(text, "LDA #$01");
        assert_eq!(len, 2);
    }

    #[test]
    fn renders_absolute_store() {
        let mut mmu = Mmu::new();
        mmu.load_at(0x8000, &[0x8D, 0x00, 0x02]);
        let (text, _) = disassemble_at(&mmu, 0x8000);
        assert_eq!(text, "STA $0200");
    }

    #[test]
    fn renders_absolute_x_store() {
        let mut mmu = Mmu::new();
        mmu.load_at(0x8000, &[0x9D, 0x00, 0x02]);
        let (text, _) = disassemble_at(&mmu, 0x8000);
        assert_eq!(text, "STA $0200,X");
    }

    #[test]
    fn renders_indirect_indexed_load() {
        let mut mmu = Mmu::new();
        mmu.load_at(0x8000, &[0xB1, 0x10]);
        let (text, _) = disassemble_at(&mmu, 0x8000);
        assert_eq!(text, "LDA ($10),Y");
    }

    #[test]
    fn renders_undefined_opcode_as_byte_directive() {
        let mut mmu = Mmu::new();
        mmu.load_at(0x8000, &[0x02]);
        let (text, len) = disassemble_at(&mmu, 0x8000);
        assert_eq!(text, ".byte $02");
        assert_eq!(len, 1);
    }
}
