//! Per-mnemonic-family semantic actions, one file per family.
//! Each function has the signature `fn(&mut CpuState, &mut Mmu, u16) -> u32`
//! expected by [`crate::cpu::table::Instruction::action`]: the `u16` is the
//! resolved operand (an address for every mode except Implied/Accumulator,
//! which ignore it), and the `u32` return is any extra cycles the action
//! itself charges (only branches do this — page-cross extras for addressing
//! modes are charged by the resolver instead).

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
