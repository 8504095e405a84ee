use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use emu8_core::constants::TIMER_HZ;
use emu8_core::{Chip8, Chip8Error, Renderer, RomLoader};
use emu8_display::Display;

use crate::keymap::{keymap, Keypad};
use crate::rom::FileRomLoader;
use crate::{Args, ErrorPolicy};

/// How to get past a failed step
/// - unknown opcodes are always skipped
/// - every other fault follows the configured policy
fn recovery(policy: ErrorPolicy, error: &Chip8Error) -> ErrorPolicy {
    match error {
        Chip8Error::UnknownOpcode { .. } => ErrorPolicy::Skip,
        _ => policy,
    }
}

pub fn run(args: &Args) -> anyhow::Result<()> {
    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let rom = FileRomLoader
        .load(&args.rom)
        .with_context(|| format!("unable to read {}", args.rom.display()))?;
    chip8.load_rom(&rom)?;
    info!("loaded {} ({} bytes)", args.rom.display(), rom.len());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!("unable to start sdl2: {}", e))?;
    let mut display =
        Display::new(&sdl, args.scale).map_err(|e| anyhow!("unable to open window: {}", e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!("unable to read events: {}", e))?;
    let mut keypad = Keypad::new();

    // Set initial timing
    let cycle_time = Duration::from_secs(1) / args.clock_hz;
    let frame_time = Duration::from_secs(1) / TIMER_HZ;
    let mut last_cycle = Instant::now();
    let mut last_frame = Instant::now();

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;
    // Set once a fault stops execution under the halt policy
    let mut halted = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => keypad.press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => keypad.release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Once per frame: latch input, tick timers and render
        if last_frame.elapsed() >= frame_time {
            chip8.poll_keys(&mut keypad)?;
            chip8.advance_timers();
            display.present(chip8.frame());
            last_frame = Instant::now();
        }

        // Update state
        if !halted {
            let pc = chip8.state().pc();
            if let Err(e) = chip8.advance_cpu() {
                match recovery(args.on_error, &e) {
                    ErrorPolicy::Halt => {
                        error!("halted at {:#05X}: {}", pc, e);
                        halted = true;
                    }
                    ErrorPolicy::Skip => {
                        warn!("skipping instruction at {:#05X}: {}", pc, e);
                        if let Err(e) = chip8.skip_instruction() {
                            error!("halted at {:#05X}: {}", pc, e);
                            halted = true;
                        }
                    }
                }
            }
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    Ok(())
}
