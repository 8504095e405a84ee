mod keymap;
mod rom;
mod run;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use emu8_core::constants::CLOCK_HZ;

/// What the interpreter does when an instruction can't be executed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ErrorPolicy {
    /// Stop executing and keep showing the last frame
    Halt,
    /// Log the fault and move on to the next instruction
    Skip,
}

/// A Chip-8 interpreter
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = CLOCK_HZ, value_parser = clap::value_parser!(u32).range(1..))]
    clock_hz: u32,

    /// Size multiplier for each Chip-8 pixel
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// What to do on a fault other than an unknown opcode, which is always skipped
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Halt)]
    on_error: ErrorPolicy,

    /// Seed for Cxnn, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    run::run(&args)
}
