mod bus;
mod cartridge;
mod gameboy;

pub use bus::{GameBoyBus, Interrupt};
pub use cartridge::{BootStatus, CartType, Cartridge, CartridgeError, Header, Mapper};
pub use gameboy::GameBoy;
