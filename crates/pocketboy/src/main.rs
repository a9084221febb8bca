//! Headless CLI frontend for the pocketboy emulation core.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use pocketboy_gb::machine::{BootStatus, Cartridge, CartridgeError};
use pocketboy_gb::GameBoy;

/// Exit code for an unreadable ROM file.
const EXIT_IO: i32 = 1;
/// Exit code for an image the loader rejects outright.
const EXIT_BAD_ROM: i32 = 2;
/// Exit code for a fatal invalid opcode during emulation.
const EXIT_INVALID_OPCODE: i32 = 3;

#[derive(Parser, Debug)]
#[command(name = "pocketboy")]
#[command(about = "A headless Game Boy (DMG) emulator core", long_about = None)]
struct Args {
    /// Path to the ROM image
    rom: PathBuf,

    /// Number of frames to run (one frame = 17 556 machine cycles)
    #[arg(short, long, default_value = "60")]
    frames: u64,

    /// Dump the CPU register file after the run
    #[arg(short = 'c', long)]
    dump_cpu: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let cart = match Cartridge::from_file(&args.rom) {
        Ok(cart) => cart,
        Err(err @ CartridgeError::Io(_)) => {
            eprintln!("{err}");
            process::exit(EXIT_IO);
        }
        Err(err @ CartridgeError::TooSmall(_)) => {
            eprintln!("{err}");
            process::exit(EXIT_BAD_ROM);
        }
    };

    // Validation failures are reported but the image still runs; a boot
    // ROM would refuse it, cartridge code often does not care.
    match cart.status() {
        BootStatus::Ok => {}
        status => log::warn!("ROM failed boot validation: {status}"),
    }
    log::info!("loaded {cart}");

    let mut gb = GameBoy::new(cart);
    for _ in 0..args.frames {
        if let Err(err) = gb.run_frame() {
            eprintln!("emulation stopped: {err}");
            process::exit(EXIT_INVALID_OPCODE);
        }
    }

    if args.dump_cpu {
        dump_cpu_state(&gb);
    }
}

fn dump_cpu_state(gb: &GameBoy) {
    let regs = &gb.cpu.regs;
    println!("CPU state:");
    println!("  AF: {:04X}", regs.af());
    println!("  BC: {:04X}", regs.bc());
    println!("  DE: {:04X}", regs.de());
    println!("  HL: {:04X}", regs.hl());
    println!("  SP: {:04X}", regs.sp);
    println!("  PC: {:04X}", regs.pc);
    println!("  IME: {}  halted: {}", gb.cpu.ime, gb.cpu.halted);
}
