use crate::cpu::{Cpu, CpuError};
use crate::MCYCLES_PER_FRAME;

use super::bus::{GameBoyBus, Interrupt};
use super::cartridge::Cartridge;

/// High-level DMG machine: the CPU plus the bus that owns the cartridge
/// and memory regions. The CPU borrows the bus per call, so the pair has
/// no internal back-references.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: GameBoyBus,
}

impl GameBoy {
    pub fn new(cart: Cartridge) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::new(cart),
        }
    }

    /// Return the machine to its post-boot state, keeping the cartridge.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
    }

    /// Advance one machine cycle.
    pub fn clock(&mut self) -> Result<(), CpuError> {
        self.cpu.clock(&mut self.bus)
    }

    /// Run to the next instruction boundary; returns machine cycles spent.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        self.cpu.step(&mut self.bus)
    }

    /// Run one frame's worth of machine time (17 556 M-cycles).
    pub fn run_frame(&mut self) -> Result<u32, CpuError> {
        let mut cycles = 0u32;
        while cycles < MCYCLES_PER_FRAME {
            cycles += self.step()?;
        }
        Ok(cycles)
    }

    /// Forward an interrupt request from external hardware.
    pub fn request_interrupt(&mut self, kind: Interrupt) {
        self.bus.request_interrupt(kind);
    }
}
