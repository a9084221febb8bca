use crate::cpu::opcodes::Opcode;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// All LD forms. Memory targets take one byte, or two (low first) when
    /// the source is a 16-bit register (`LD [a16], SP`).
    pub(super) fn exec_ld<B: Bus>(&mut self, bus: &mut B, inst: &Opcode) {
        if self.is_mem_target {
            bus.write8(self.mem_loc, self.value as u8);
            if inst.src.is_wide() {
                bus.write8(self.mem_loc.wrapping_add(1), (self.value >> 8) as u8);
            }
        } else {
            self.write_reg(inst.dest, self.value);
        }
    }

    /// `LDH [a8], A` / `LDH A, [a8]`: single-byte transfers against the
    /// 0xFF00 page.
    pub(super) fn exec_ldh<B: Bus>(&mut self, bus: &mut B, inst: &Opcode) {
        if self.is_mem_target {
            bus.write8(self.mem_loc, self.value as u8);
        } else {
            self.write_reg(inst.dest, self.value);
        }
    }
}
