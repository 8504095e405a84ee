use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A single monochrome cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pixel {
    Off,
    On,
}

impl Pixel {
    pub fn is_on(self) -> bool {
        self == Pixel::On
    }

    fn toggled(self) -> Self {
        match self {
            Pixel::Off => Pixel::On,
            Pixel::On => Pixel::Off,
        }
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::Off
    }
}

/// # FrameBuffer
/// The contents of a single 64x32 Chip-8 frame, indexed as [y][x].
///
/// Only the clear and draw instructions mutate it; renderers get a shared reference between
/// steps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pixels: [[Pixel; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[Pixel::Off; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[Pixel::Off; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// `None` for coordinates outside the screen
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel; DISPLAY_WIDTH]> {
        self.pixels.iter()
    }

    /// XORs one byte of sprite data onto row `y` starting at column `x`.
    /// Bits that would land past the right edge are dropped rather than wrapped.
    /// Returns true if any lit pixel was turned off.
    pub(crate) fn xor_byte(&mut self, x: usize, y: usize, byte: u8) -> bool {
        let row = match self.pixels.get_mut(y) {
            Some(row) => row,
            None => return false,
        };
        let mut collision = false;
        for bit in 0..8 {
            let column = x + bit;
            if column >= DISPLAY_WIDTH {
                break;
            }
            if (byte >> (7 - bit)) & 0x1 == 0x1 {
                collision |= row[column].is_on();
                row[column] = row[column].toggled();
            }
        }
        collision
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
