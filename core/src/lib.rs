pub use chip8::Chip8;
pub use decoder::{decode, OpcodeId};
pub use engine::{step, Step};
pub use error::{Chip8Error, Result};
pub use frame_buffer::{FrameBuffer, Pixel};
pub use memory::Memory;
pub use peripherals::{KeyProvider, Renderer, RomLoader};
pub use state::MachineState;

mod chip8;
pub mod constants;
mod decoder;
mod engine;
mod error;
mod frame_buffer;
mod memory;
mod opcode;
mod operations;
mod peripherals;
mod state;
