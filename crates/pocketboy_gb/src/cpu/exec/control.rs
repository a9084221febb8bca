use crate::cpu::opcodes::{Cond, Opcode};
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    fn condition_met(&self, cond: Cond) -> bool {
        match cond {
            Cond::None => true,
            Cond::Z => self.get_flag(Flag::Z),
            Cond::Nz => !self.get_flag(Flag::Z),
            Cond::C => self.get_flag(Flag::C),
            Cond::Nc => !self.get_flag(Flag::C),
        }
    }

    /// Extra machine cycles charged when a conditional transfer is taken.
    #[inline]
    fn taken_delta(cond: Cond, delta: u8) -> u8 {
        if cond == Cond::None {
            // Unconditional forms already carry the full cost in their
            // descriptor.
            0
        } else {
            delta
        }
    }

    /// JP a16 / JP cc,a16 / JP HL.
    pub(super) fn exec_jp(&mut self, inst: &Opcode) -> u8 {
        if !self.condition_met(inst.cond) {
            return 0;
        }
        self.regs.pc = self.value;
        Self::taken_delta(inst.cond, 1)
    }

    /// JR e8 / JR cc,e8: signed displacement from the address after the
    /// operand.
    pub(super) fn exec_jr(&mut self, inst: &Opcode) -> u8 {
        if !self.condition_met(inst.cond) {
            return 0;
        }
        let offset = self.value as u8 as i8 as i16 as u16;
        self.regs.pc = self.regs.pc.wrapping_add(offset);
        Self::taken_delta(inst.cond, 1)
    }

    /// CALL a16 / CALL cc,a16: push the address after the operand, high
    /// byte first.
    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, inst: &Opcode) -> u8 {
        if !self.condition_met(inst.cond) {
            return 0;
        }
        let ret = self.regs.pc;
        self.push16(bus, ret);
        self.regs.pc = self.value;
        Self::taken_delta(inst.cond, 3)
    }

    /// RET / RET cc.
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, inst: &Opcode) -> u8 {
        if !self.condition_met(inst.cond) {
            return 0;
        }
        self.pop_pc(bus);
        Self::taken_delta(inst.cond, 3)
    }

    /// RETI: RET plus an immediate (not delayed) IME enable.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.pop_pc(bus);
        self.ime = true;
    }

    /// RST n: push PC and jump to the fixed vector.
    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, inst: &Opcode) {
        let ret = self.regs.pc;
        self.push16(bus, ret);
        self.regs.pc = inst.rst as u16;
    }

    fn pop_pc<B: Bus>(&mut self, bus: &mut B) {
        let lo = bus.read8(self.regs.sp) as u16;
        let hi = bus.read8(self.regs.sp.wrapping_add(1)) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        self.regs.pc = (hi << 8) | lo;
    }
}
