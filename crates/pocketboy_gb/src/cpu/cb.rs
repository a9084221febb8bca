//! CB-prefixed opcode dispatch.
//!
//! The second byte decodes by octal fields: bits 6-7 select the group
//! (shift/rotate, BIT, RES, SET), bits 3-5 the operation or bit number,
//! bits 0-2 the operand register (6 = `[HL]`). Unlike the accumulator
//! rotates in the primary table, the CB rotate family sets Z from the
//! result.

use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Fetch the second opcode byte and run the CB operation it encodes.
    ///
    /// Returns the instruction's full cost in machine cycles, prefix fetch
    /// included.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let cb = self.fetch8(bus);
        let group = cb >> 6;
        let sel = (cb >> 3) & 0x07;
        let operand = cb & 0x07;

        match group {
            0 => {
                let mut value = self.read_reg8(bus, operand);
                let cycles = if operand == 6 { 4 } else { 2 };

                match sel {
                    // RLC r
                    0 => {
                        let carry = (value & 0x80) != 0;
                        value = value.rotate_left(1);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // RRC r
                    1 => {
                        let carry = (value & 0x01) != 0;
                        value = value.rotate_right(1);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // RL r
                    2 => {
                        let carry_out = (value & 0x80) != 0;
                        let carry_in = self.get_flag(Flag::C) as u8;
                        value = (value << 1) | carry_in;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry_out);
                    }
                    // RR r
                    3 => {
                        let carry_out = (value & 0x01) != 0;
                        let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
                        value = (value >> 1) | carry_in;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry_out);
                    }
                    // SLA r
                    4 => {
                        let carry = (value & 0x80) != 0;
                        value <<= 1;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // SRA r
                    5 => {
                        let carry = (value & 0x01) != 0;
                        let msb = value & 0x80;
                        value = (value >> 1) | msb;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // SWAP r
                    6 => {
                        value = value.rotate_left(4);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                    }
                    // SRL r
                    _ => {
                        let carry = (value & 0x01) != 0;
                        value >>= 1;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                }

                self.write_reg8(bus, operand, value);
                cycles
            }
            // BIT b, r: flags only, C preserved.
            1 => {
                let value = self.read_reg8(bus, operand);
                self.set_flag(Flag::Z, (value & (1 << sel)) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
                if operand == 6 {
                    3
                } else {
                    2
                }
            }
            // RES b, r
            2 => {
                let value = self.read_reg8(bus, operand) & !(1 << sel);
                self.write_reg8(bus, operand, value);
                if operand == 6 {
                    4
                } else {
                    2
                }
            }
            // SET b, r
            _ => {
                let value = self.read_reg8(bus, operand) | (1 << sel);
                self.write_reg8(bus, operand, value);
                if operand == 6 {
                    4
                } else {
                    2
                }
            }
        }
    }

    /// Read an 8-bit operand by CB index: 0=B 1=C 2=D 3=E 4=H 5=L 6=[HL]
    /// 7=A.
    #[inline]
    fn read_reg8<B: Bus>(&mut self, bus: &mut B, index: u8) -> u8 {
        match index {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Write an 8-bit operand by CB index (see `read_reg8`).
    #[inline]
    fn write_reg8<B: Bus>(&mut self, bus: &mut B, index: u8, value: u8) {
        match index {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }
}
