use crate::cpu::opcodes::Opcode;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// INC r8 / INC rr / INC [HL]. The 16-bit forms leave flags alone.
    pub(super) fn exec_inc<B: Bus>(&mut self, bus: &mut B, inst: &Opcode) {
        if !self.is_mem_target && inst.dest.is_wide() {
            let result = self.value.wrapping_add(1);
            self.write_reg(inst.dest, result);
            return;
        }

        let result = self.alu_inc8(self.value as u8);
        self.store8(bus, inst.dest, result);
    }

    /// DEC r8 / DEC rr / DEC [HL].
    pub(super) fn exec_dec<B: Bus>(&mut self, bus: &mut B, inst: &Opcode) {
        if !self.is_mem_target && inst.dest.is_wide() {
            let result = self.value.wrapping_sub(1);
            self.write_reg(inst.dest, result);
            return;
        }

        let result = self.alu_dec8(self.value as u8);
        self.store8(bus, inst.dest, result);
    }
}
