//! The pieces of the outside world the interpreter talks to. The driving loop owns the
//! implementations and hands them to the machine by argument.

use std::path::Path;

use crate::error::Result;
use crate::frame_buffer::FrameBuffer;

/// Shows a frame to the user; called once per host frame
pub trait Renderer {
    fn present(&mut self, frame: &FrameBuffer);
}

/// Reports the key currently held on the hexadecimal keypad, if any
pub trait KeyProvider {
    fn current_key(&mut self) -> Option<u8>;
}

/// Produces the raw bytes of a ROM.
/// Implementations reject anything over 3584 bytes with `RomTooLarge` before reading it.
pub trait RomLoader {
    fn load(&self, path: &Path) -> Result<Vec<u8>>;
}
