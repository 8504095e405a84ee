/// Total addressable memory in bytes
pub const MEMORY_SIZE: usize = 0x1000;

/// 0x000 - 0x200 is reserved for the interpreter (the font lives here)
/// 0x200 is where ROMs are loaded into memory
pub const PROGRAM_START: usize = 0x200;

/// The largest ROM that fits in the program region
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START;

/// Every opcode is two bytes wide
pub const INSTRUCTION_WIDTH: u16 = 0x2;

/// V0..VF
pub const REGISTER_COUNT: usize = 0x10;

/// VF doubles as the carry/borrow/collision flag
pub const FLAG_REGISTER: u8 = 0xF;

/// Maximum subroutine nesting depth
pub const STACK_SIZE: usize = 12;

/// Keys 0..F on the hexadecimal keypad
pub const KEY_COUNT: u8 = 0x10;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// The rate at which the delay and sound timers should be decremented
pub const TIMER_HZ: u32 = 60;

/// Default instruction rate for driving loops
pub const CLOCK_HZ: u32 = 500;

/// Each glyph in the sprite sheet is 5 bytes tall
pub const GLYPH_SIZE: u16 = 5;

/// # Sprite Sheet
/// One 4x5 glyph for each hexadecimal digit, stored from address 0x000.
/// Only the high nibble of each byte is drawn.
/// ```text
/// "0"     Binary   Hex
/// ****    11110000 0xF0
/// *  *    10010000 0x90
/// *  *    10010000 0x90
/// *  *    10010000 0x90
/// ****    11110000 0xF0
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
