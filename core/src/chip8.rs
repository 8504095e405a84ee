use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::INSTRUCTION_WIDTH;
use crate::engine::{self, Step};
use crate::error::Result;
use crate::frame_buffer::FrameBuffer;
use crate::peripherals::KeyProvider;
use crate::state::MachineState;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random number source behind `Cxnn`
///
/// Supplies interfaces for:
/// - loading roms
/// - latching the currently pressed key
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: MachineState,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: MachineState::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A machine whose `Cxnn` results are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: MachineState::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Load a rom into the program region
    ///
    /// # Arguments
    /// * `rom` the raw bytes of a ROM, at most 3584 of them
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.state.load_rom(rom)
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// The FrameBuffer as of the last executed instruction
    pub fn frame(&self) -> &FrameBuffer {
        self.state.frame_buffer()
    }

    /// Latch whatever the keypad reports as currently held
    ///
    /// # Arguments
    /// * `keys` the host's keypad
    pub fn poll_keys(&mut self, keys: &mut dyn KeyProvider) -> Result<()> {
        match keys.current_key() {
            Some(key) => self.state.set_key(key),
            None => {
                self.state.clear_key();
                Ok(())
            }
        }
    }

    /// Advances the CPU by a single instruction
    pub fn advance_cpu(&mut self) -> Result<Step> {
        engine::step(&mut self.state, &mut self.rng)
    }

    /// Moves the PC past the current instruction without executing it
    pub fn skip_instruction(&mut self) -> Result<()> {
        self.state.advance_pc(INSTRUCTION_WIDTH)
    }

    /// Decrements both timers towards 0; call this at 60Hz
    pub fn advance_timers(&mut self) {
        let delay = self.state.delay_timer();
        self.state.set_delay_timer(delay.saturating_sub(1));
        let sound = self.state.sound_timer();
        self.state.set_sound_timer(sound.saturating_sub(1));
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
