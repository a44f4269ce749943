use std::fs;

use anyhow::{bail, Context, Result};

use chip8vm::keyboard::Keyboard;
use chip8vm::screen::Screen;
use chip8vm::Emulator;

// CPU, timers and display all run off the same ~60 Hz tick; the window's
// update-rate limiter is the clock.

fn main() -> Result<()> {
    env_logger::init();

    let rom_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: chip8vm <rom>"),
    };
    let rom = fs::read(&rom_path).with_context(|| format!("reading rom {rom_path}"))?;

    let mut emu = Emulator::new();
    emu.load_rom(&rom)?;
    log::info!("loaded {} byte rom from {}", rom.len(), rom_path);

    let mut screen = Screen::new()?;
    let mut keyboard = Keyboard::new();

    while screen.is_running() {
        keyboard.poll(screen.window());
        emu.step(keyboard.snapshot())?;
        if emu.fb.needs_redraw() {
            screen.render(&emu.fb)?;
            emu.fb.clear_redraw();
        } else {
            screen.refresh();
        }
    }
    Ok(())
}
