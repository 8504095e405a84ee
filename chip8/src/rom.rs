use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use log::debug;

use emu8_core::constants::MAX_ROM_SIZE;
use emu8_core::{Chip8Error, Result, RomLoader};

/// Reads ROMs straight off the filesystem
pub struct FileRomLoader;

impl RomLoader for FileRomLoader {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        let size = fs::metadata(path)?.len();
        if size > MAX_ROM_SIZE as u64 {
            return Err(too_large(usize::try_from(size).unwrap_or(usize::MAX)));
        }
        // The file may have grown since its metadata was read
        let rom = fs::read(path)?;
        if rom.len() > MAX_ROM_SIZE {
            return Err(too_large(rom.len()));
        }
        debug!("read {} bytes from {}", rom.len(), path.display());
        Ok(rom)
    }
}

fn too_large(size: usize) -> Chip8Error {
    Chip8Error::RomTooLarge {
        size,
        max_size: MAX_ROM_SIZE,
    }
}
