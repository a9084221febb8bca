use crate::cpu::opcodes::{Opcode, Reg};
use crate::cpu::{Cpu, Flag};

impl Cpu {
    /// ADD covers three encodings, told apart by the destination tag:
    /// `ADD A,x` (8-bit), `ADD HL,rr` (16-bit), and `ADD SP,e8` (signed
    /// offset).
    pub(super) fn exec_add(&mut self, inst: &Opcode) {
        match inst.dest {
            Reg::Sp => {
                let result = self.alu_add16_signed(self.regs.sp, self.value as u8);
                self.regs.sp = result;
            }
            Reg::Hl => self.alu_add16_hl(self.value),
            _ => self.alu_add(self.value as u8, false),
        }
    }

    /// `LD HL, SP + e8`: same flag behaviour as `ADD SP, e8`.
    pub(super) fn exec_ld_hl_sp(&mut self) {
        let result = self.alu_add16_signed(self.regs.sp, self.value as u8);
        self.regs.set_hl(result);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
    }

    // The four accumulator rotates. Unlike their CB-prefixed relatives,
    // these always clear Z.

    pub(super) fn exec_rlca(&mut self) {
        let a = self.regs.a;
        self.regs.a = a.rotate_left(1);
        self.clear_flags();
        self.set_flag(Flag::C, (a & 0x80) != 0);
    }

    pub(super) fn exec_rrca(&mut self) {
        let a = self.regs.a;
        self.regs.a = a.rotate_right(1);
        self.clear_flags();
        self.set_flag(Flag::C, (a & 0x01) != 0);
    }

    pub(super) fn exec_rla(&mut self) {
        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::C) as u8;
        self.regs.a = (a << 1) | carry_in;
        self.clear_flags();
        self.set_flag(Flag::C, (a & 0x80) != 0);
    }

    pub(super) fn exec_rra(&mut self) {
        let a = self.regs.a;
        let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
        self.regs.a = (a >> 1) | carry_in;
        self.clear_flags();
        self.set_flag(Flag::C, (a & 0x01) != 0);
    }
}
