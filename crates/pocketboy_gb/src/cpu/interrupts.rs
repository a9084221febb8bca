//! Interrupt servicing and the EI delay pipeline.

use super::{Bus, Cpu};

impl Cpu {
    /// Service the highest-priority pending maskable interrupt, if any.
    ///
    /// Returns `Some(cycles)` when an interrupt entry ran. A pending
    /// request also wakes a halted CPU even when IME is clear, in which
    /// case execution resumes without servicing.
    pub(super) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<u8> {
        let ie = bus.read8(0xFFFF);
        let iflags = bus.read8(0xFF0F);
        let pending = ie & iflags & 0x1F;
        if pending == 0 {
            return None;
        }

        if self.halted && !self.ime {
            self.halted = false;
            return None;
        }

        if !self.ime {
            return None;
        }

        // Lowest-numbered bit wins: VBlank > LCD STAT > Timer > Serial >
        // Joypad.
        let index = pending.trailing_zeros() as u8;

        self.ime = false;
        self.halted = false;

        let pc = self.regs.pc;
        self.push16(bus, pc);
        bus.write8(0xFF0F, iflags & !(1 << index));

        let vector = 0x0040 + (index as u16) * 8;
        log::debug!(
            "interrupt dispatch: idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
            index,
            vector,
            pc,
            self.regs.sp,
        );
        self.regs.pc = vector;

        Some(5)
    }

    /// Apply the delayed IME change requested by EI.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            // Second boundary after EI: actually enable IME.
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            // First boundary after EI: arm the delayed enable.
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
