//! CHIP-8 virtual machine.
//!
//! The interpreter core ([`emulator::Emulator`]) is headless and
//! deterministic: the host supplies a key snapshot and calls
//! [`emulator::Emulator::step`] once per tick, then renders the framebuffer
//! whenever the redraw flag is up. [`screen`] and [`keyboard`] are the thin
//! minifb frontend the bundled binary uses.

pub mod decode;
pub mod display;
pub mod emulator;
pub mod error;
pub mod keyboard;
pub mod memory;
pub mod registers;
pub mod screen;
pub mod timer;

pub use emulator::{Emulator, Keys};
pub use error::Chip8Error;
