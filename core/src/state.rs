use log::debug;

use crate::constants::{
    FLAG_REGISTER, INSTRUCTION_WIDTH, KEY_COUNT, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START,
    REGISTER_COUNT, STACK_SIZE,
};
use crate::error::{Chip8Error, Result};
use crate::frame_buffer::FrameBuffer;
use crate::memory::Memory;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) indexes the next free slot of the 12-entry return stack
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented by whoever drives the machine
///
/// ## Memory
/// - 4096 bytes of addressable memory, sprite sheet preloaded at 0x000
/// - 64x32 frame buffer
///
/// ## Input
/// - the currently pressed key, if any
/// - the register waiting on a keypress, if any
///
/// All mutation goes through the checked methods below.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MachineState {
    v: [u8; REGISTER_COUNT],
    i: u16,
    pc: u16,
    sp: usize,
    stack: [u16; STACK_SIZE],
    delay_timer: u8,
    sound_timer: u8,
    memory: Memory,
    frame_buffer: FrameBuffer,
    key: Option<u8>,
    register_needing_key: Option<u8>,
}

impl MachineState {
    pub fn new() -> Self {
        MachineState {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START as u16,
            sp: 0,
            stack: [0; STACK_SIZE],
            delay_timer: 0,
            sound_timer: 0,
            memory: Memory::new(),
            frame_buffer: FrameBuffer::new(),
            key: None,
            register_needing_key: None,
        }
    }

    /// Copy `bytes` into the program region starting at `offset`
    pub fn load(&mut self, bytes: &[u8], offset: usize) -> Result<()> {
        if offset < PROGRAM_START {
            return Err(Chip8Error::OutOfBounds { address: offset });
        }
        self.memory.write(offset, bytes)
    }

    /// Load a whole ROM at 0x200, rejecting it before any byte is written if it can't fit
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        self.load(rom, PROGRAM_START)?;
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    pub fn read_byte(&self, addr: usize) -> Result<u8> {
        self.memory.read_byte(addr)
    }

    pub fn write_byte(&mut self, addr: usize, value: u8) -> Result<()> {
        self.memory.write_byte(addr, value)
    }

    pub fn read_word(&self, addr: usize) -> Result<u16> {
        self.memory.read_word(addr)
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub(crate) fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn register(&self, r: u8) -> Result<u8> {
        self.v
            .get(r as usize)
            .copied()
            .ok_or(Chip8Error::InvalidRegister { register: r })
    }

    pub fn set_register(&mut self, r: u8, value: u8) -> Result<()> {
        let register = self
            .v
            .get_mut(r as usize)
            .ok_or(Chip8Error::InvalidRegister { register: r })?;
        *register = value;
        Ok(())
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.v
    }

    /// VF = bit
    pub fn set_flag(&mut self, bit: bool) {
        self.v[FLAG_REGISTER as usize] = u8::from(bit);
    }

    pub fn index(&self) -> u16 {
        self.i
    }

    pub fn set_index(&mut self, value: u16) {
        self.i = value;
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, addr: u16) -> Result<()> {
        if addr as usize >= MEMORY_SIZE {
            return Err(Chip8Error::OutOfBounds {
                address: addr as usize,
            });
        }
        self.pc = addr;
        Ok(())
    }

    /// PC += n, as long as there's still room to fetch an instruction at the new PC
    pub fn advance_pc(&mut self, n: u16) -> Result<()> {
        let next = self.pc as usize + n as usize;
        if next + INSTRUCTION_WIDTH as usize > MEMORY_SIZE {
            return Err(Chip8Error::OutOfBounds { address: next });
        }
        self.pc = next as u16;
        Ok(())
    }

    pub fn sp(&self) -> usize {
        self.sp
    }

    pub fn push_return(&mut self, addr: u16) -> Result<()> {
        if self.sp == STACK_SIZE {
            return Err(Chip8Error::StackOverflow);
        }
        self.stack[self.sp] = addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop_return(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer = value;
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }

    pub fn key(&self) -> Option<u8> {
        self.key
    }

    /// Latch the currently pressed key
    /// - if a register is waiting on a keypress it receives the key and the wait ends
    /// - re-latching the key that is already held isn't a keypress
    pub fn set_key(&mut self, code: u8) -> Result<()> {
        if code >= KEY_COUNT {
            return Err(Chip8Error::InvalidKey { key: code });
        }
        let pressed = self.key != Some(code);
        self.key = Some(code);
        if !pressed {
            return Ok(());
        }
        if let Some(register) = self.register_needing_key.take() {
            debug!("key {:X} delivered to V{:X}", code, register);
            self.v[register as usize] = code;
        }
        Ok(())
    }

    pub fn clear_key(&mut self) {
        self.key = None;
    }

    pub fn register_needing_key(&self) -> Option<u8> {
        self.register_needing_key
    }

    pub fn await_key(&mut self, register: u8) -> Result<()> {
        if register as usize >= REGISTER_COUNT {
            return Err(Chip8Error::InvalidRegister { register });
        }
        debug!("V{:X} waiting on a keypress", register);
        self.register_needing_key = Some(register);
        Ok(())
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub(crate) fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame_buffer
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
