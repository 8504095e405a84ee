use crate::constants::{MEMORY_SIZE, SPRITE_SHEET};
use crate::error::{Chip8Error, Result};

/// # Memory
/// 4096 bytes of flat, byte-addressable memory.
///
/// ```text
/// 0x000 - 0x050  sprite sheet
/// 0x050 - 0x200  reserved for the interpreter
/// 0x200 - 0x1000 program
/// ```
///
/// Every access is bounds checked; nothing here panics on a bad address.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet at 0x000
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read_byte(&self, addr: usize) -> Result<u8> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(Chip8Error::OutOfBounds { address: addr })
    }

    pub fn write_byte(&mut self, addr: usize, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(addr)
            .ok_or(Chip8Error::OutOfBounds { address: addr })?;
        *byte = value;
        Ok(())
    }

    /// Opcodes are 16 bits so we combine two subsequent bytes, big-endian.
    pub fn read_word(&self, addr: usize) -> Result<u16> {
        let left = u16::from(self.read_byte(addr)?);
        let right = u16::from(self.read_byte(addr + 1)?);
        Ok(left << 8 | right)
    }

    /// Borrow `len` bytes starting at `addr`
    pub fn slice(&self, addr: usize, len: usize) -> Result<&[u8]> {
        let end = Self::end_of(addr, len)?;
        Ok(&self.bytes[addr..end])
    }

    /// Copy `data` into memory starting at `addr`; writes nothing if any of it would fall
    /// outside of memory.
    pub fn write(&mut self, addr: usize, data: &[u8]) -> Result<()> {
        let end = Self::end_of(addr, data.len())?;
        self.bytes[addr..end].copy_from_slice(data);
        Ok(())
    }

    fn end_of(addr: usize, len: usize) -> Result<usize> {
        match addr.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(end),
            _ => Err(Chip8Error::OutOfBounds {
                address: addr.saturating_add(len.saturating_sub(1)),
            }),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
