use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Chip8Error>;

/// Everything that can go wrong while loading or running a program.
///
/// None of these are fatal to the process; the driving loop decides whether to
/// halt, skip the instruction or reset.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("address {address:#06X} is out of bounds")]
    OutOfBounds { address: usize },

    #[error("register V{register:X} does not exist")]
    InvalidRegister { register: u8 },

    #[error("key {key:#04X} is not on the keypad")]
    InvalidKey { key: u8 },

    #[error("stack overflow: too many nested subroutine calls")]
    StackOverflow,

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("unable to read ROM: {0}")]
    RomReadError(#[from] io::Error),
}
