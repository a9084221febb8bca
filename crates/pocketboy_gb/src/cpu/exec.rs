//! Opcode handlers.
//!
//! Handlers consume the operand state resolved by the fetch engine and the
//! descriptor's register/condition tags; they never decode or fetch
//! operands themselves. The dispatcher returns the extra machine cycles a
//! taken conditional transfer charges on top of the descriptor's base cost.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::opcodes::{Kind, Opcode};
use super::{Bus, Cpu};

impl Cpu {
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, inst: &Opcode) -> u8 {
        match inst.kind {
            Kind::Nop => 0,

            Kind::Ld => {
                self.exec_ld(bus, inst);
                0
            }
            Kind::Ldh => {
                self.exec_ldh(bus, inst);
                0
            }
            Kind::LdHlSp => {
                self.exec_ld_hl_sp();
                0
            }

            Kind::Push => {
                self.exec_push(bus);
                0
            }
            Kind::Pop => {
                self.exec_pop(inst);
                0
            }

            Kind::Add => {
                self.exec_add(inst);
                0
            }
            Kind::Adc => {
                self.alu_add(self.value as u8, true);
                0
            }
            Kind::Sub => {
                self.alu_sub(self.value as u8, false);
                0
            }
            Kind::Sbc => {
                self.alu_sub(self.value as u8, true);
                0
            }
            Kind::Cp => {
                self.alu_cp(self.value as u8);
                0
            }
            Kind::Inc => {
                self.exec_inc(bus, inst);
                0
            }
            Kind::Dec => {
                self.exec_dec(bus, inst);
                0
            }
            Kind::And => {
                self.alu_and(self.value as u8);
                0
            }
            Kind::Or => {
                self.alu_or(self.value as u8);
                0
            }
            Kind::Xor => {
                self.alu_xor(self.value as u8);
                0
            }
            Kind::Daa => {
                self.alu_daa();
                0
            }
            Kind::Cpl => {
                self.exec_cpl();
                0
            }
            Kind::Ccf => {
                self.exec_ccf();
                0
            }
            Kind::Scf => {
                self.exec_scf();
                0
            }

            Kind::Rlc => {
                self.exec_rlca();
                0
            }
            Kind::Rrc => {
                self.exec_rrca();
                0
            }
            Kind::Rl => {
                self.exec_rla();
                0
            }
            Kind::Rr => {
                self.exec_rra();
                0
            }

            Kind::Jp => self.exec_jp(inst),
            Kind::Jr => self.exec_jr(inst),
            Kind::Call => self.exec_call(bus, inst),
            Kind::Ret => self.exec_ret(bus, inst),
            Kind::Reti => {
                self.exec_reti(bus);
                0
            }
            Kind::Rst => {
                self.exec_rst(bus, inst);
                0
            }

            Kind::Halt => {
                self.exec_halt(bus);
                0
            }
            Kind::Stop => {
                self.exec_stop();
                0
            }
            Kind::Di => {
                self.exec_di();
                0
            }
            Kind::Ei => {
                self.exec_ei();
                0
            }

            // Both are resolved at the fetch boundary, before dispatch.
            Kind::Invalid | Kind::Prefix => unreachable!("handled before dispatch"),
        }
    }
}
