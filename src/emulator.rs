use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::decode::OpCode;
use crate::display::FrameBuffer;
use crate::error::Chip8Error;
use crate::memory::{Memory, FONT_BASE};
use crate::registers::{Registers, Stack};
use crate::timer::Timer;

/// Pressed/released state of the 16-key pad, indexed by 4-bit key code.
/// Supplied wholesale by the host before each step and never mutated here.
pub type Keys = [bool; 16];

/// The interpreter. Owns memory, registers, call stack, timers and the
/// framebuffer; an external driver feeds it one input snapshot per tick and
/// calls [`Emulator::step`].
pub struct Emulator {
    pub mem: Memory,
    pub regs: Registers,
    pub fb: FrameBuffer,
    pub delay_timer: Timer,
    pub sound_timer: Timer,
    stack: Stack,
    rng: Box<dyn RngCore>,
}

impl Emulator {
    /// A fully reset machine: pc = 0x200, I = 0, empty stack, timers at 0,
    /// display off, font table loaded.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Same as [`Emulator::new`] but with a caller-supplied random source,
    /// so CXNN is reproducible under test.
    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Self {
            mem: Memory::new(),
            regs: Registers::new(),
            fb: FrameBuffer::new(),
            delay_timer: Timer::new(),
            sound_timer: Timer::new(),
            stack: Stack::new(),
            rng: Box::new(rng),
        }
    }

    /// Loads program bytes at 0x200. Call once, before the first step.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        self.mem.load_rom(rom)
    }

    /// Runs exactly one instruction cycle: fetch, decode, execute, then one
    /// timer tick. Fatal conditions (bad fetch address, unknown encoding,
    /// corrupt call stack, out-of-range I-relative access) come back as
    /// errors and leave the machine halted where it stood.
    pub fn step(&mut self, keys: &Keys) -> Result<(), Chip8Error> {
        let code = self.fetch()?;
        log::trace!("{:04X} pc={:#05X} i={:#05X}", code, self.regs.pc, self.regs.i);
        let op = OpCode::decode(code)?;
        self.execute(op, keys)?;
        self.delay_timer.tick();
        self.sound_timer.tick();
        Ok(())
    }

    /// Two consecutive bytes at pc, combined big-endian.
    fn fetch(&self) -> Result<u16, Chip8Error> {
        let hi = self.mem.get(self.regs.pc)?;
        let lo = self.mem.get(self.regs.pc + 1)?;
        Ok(u16::from(hi) << 8 | u16::from(lo))
    }

    // Each arm controls its own pc update. Where an opcode writes both the
    // flag and a result register, the flag is written first; with X = 0xF
    // the result wins, as on the original machine.
    fn execute(&mut self, op: OpCode, keys: &Keys) -> Result<(), Chip8Error> {
        match op {
            OpCode::ClearScreen => {
                self.fb.clear();
                self.regs.pc += 2;
            }
            OpCode::Return => {
                self.regs.pc = self.stack.pop()? + 2;
            }
            OpCode::Jump(addr) => {
                self.regs.pc = addr;
            }
            OpCode::Call(addr) => {
                self.stack.push(self.regs.pc)?;
                self.regs.pc = addr;
            }
            OpCode::SkipEqualConstant(x, nn) => {
                self.regs.pc += if self.regs.get(x) == nn { 4 } else { 2 };
            }
            OpCode::SkipNotEqualConstant(x, nn) => {
                self.regs.pc += if self.regs.get(x) != nn { 4 } else { 2 };
            }
            OpCode::SkipEqualRegister(x, y) => {
                self.regs.pc += if self.regs.get(x) == self.regs.get(y) { 4 } else { 2 };
            }
            OpCode::SetRegister(x, nn) => {
                self.regs.set(x, nn);
                self.regs.pc += 2;
            }
            OpCode::AddToRegister(x, nn) => {
                self.regs.set(x, self.regs.get(x).wrapping_add(nn));
                self.regs.pc += 2;
            }
            OpCode::CopyRegister(x, y) => {
                self.regs.set(x, self.regs.get(y));
                self.regs.pc += 2;
            }
            OpCode::Or(x, y) => {
                self.regs.set(x, self.regs.get(x) | self.regs.get(y));
                self.regs.pc += 2;
            }
            OpCode::And(x, y) => {
                self.regs.set(x, self.regs.get(x) & self.regs.get(y));
                self.regs.pc += 2;
            }
            OpCode::Add(x, y) => {
                let (sum, carry) = self.regs.get(x).overflowing_add(self.regs.get(y));
                self.regs.set_flag(carry as u8);
                self.regs.set(x, sum);
                self.regs.pc += 2;
            }
            OpCode::SubtractForward(x, y) => {
                let (diff, borrow) = self.regs.get(x).overflowing_sub(self.regs.get(y));
                self.regs.set_flag(!borrow as u8);
                self.regs.set(x, diff);
                self.regs.pc += 2;
            }
            OpCode::RightShift(x) => {
                let vx = self.regs.get(x);
                self.regs.set_flag(vx & 0x01);
                self.regs.set(x, vx >> 1);
                self.regs.pc += 2;
            }
            OpCode::SubtractBackward(x, y) => {
                let (diff, borrow) = self.regs.get(y).overflowing_sub(self.regs.get(x));
                self.regs.set_flag(!borrow as u8);
                self.regs.set(x, diff);
                self.regs.pc += 2;
            }
            OpCode::LeftShift(x) => {
                let vx = self.regs.get(x);
                self.regs.set_flag(vx >> 7);
                self.regs.set(x, vx << 1);
                self.regs.pc += 2;
            }
            OpCode::SkipNotEqualRegister(x, y) => {
                self.regs.pc += if self.regs.get(x) != self.regs.get(y) { 4 } else { 2 };
            }
            OpCode::SetIndex(addr) => {
                self.regs.i = addr;
                self.regs.pc += 2;
            }
            OpCode::JumpWithOffset(addr) => {
                self.regs.pc = addr + u16::from(self.regs.get(0));
            }
            OpCode::Random(x, nn) => {
                let byte: u8 = self.rng.gen();
                self.regs.set(x, byte & nn);
                self.regs.pc += 2;
            }
            OpCode::Draw(x, y, n) => {
                let mut sprite = [0u8; 15];
                for row in 0..n as usize {
                    sprite[row] = self.mem.get(self.regs.i + row as u16)?;
                }
                let collision =
                    self.fb
                        .draw_sprite(self.regs.get(x), self.regs.get(y), &sprite[..n as usize]);
                self.regs.set_flag(collision as u8);
                self.regs.pc += 2;
            }
            OpCode::SkipIfPressed(x) => {
                let key = (self.regs.get(x) & 0x0F) as usize;
                self.regs.pc += if keys[key] { 4 } else { 2 };
            }
            OpCode::SkipIfNotPressed(x) => {
                let key = (self.regs.get(x) & 0x0F) as usize;
                self.regs.pc += if keys[key] { 2 } else { 4 };
            }
            OpCode::ReadDelay(x) => {
                self.regs.set(x, self.delay_timer.get());
                self.regs.pc += 2;
            }
            OpCode::WaitForKey(x) => {
                // No key down: leave pc in place so the same instruction is
                // re-fetched next step. The caller's tick loop is the
                // suspension mechanism.
                if let Some(key) = keys.iter().position(|&pressed| pressed) {
                    self.regs.set(x, key as u8);
                    self.regs.pc += 2;
                }
            }
            OpCode::SetDelay(x) => {
                self.delay_timer.set(self.regs.get(x));
                self.regs.pc += 2;
            }
            OpCode::SetSound(x) => {
                self.sound_timer.set(self.regs.get(x));
                self.regs.pc += 2;
            }
            OpCode::AddToIndex(x) => {
                self.regs.i = (self.regs.i + u16::from(self.regs.get(x))) & 0x0FFF;
                self.regs.pc += 2;
            }
            OpCode::PointGlyph(x) => {
                self.regs.i = FONT_BASE + u16::from(self.regs.get(x)) * 5;
                self.regs.pc += 2;
            }
            OpCode::StoreBcd(x) => {
                let value = self.regs.get(x);
                self.mem.set(self.regs.i, value / 100)?;
                self.mem.set(self.regs.i + 1, value / 10 % 10)?;
                self.mem.set(self.regs.i + 2, value % 10)?;
                self.regs.pc += 2;
            }
            OpCode::StoreRegisters(x) => {
                for reg in 0..=x {
                    self.mem.set(self.regs.i + u16::from(reg), self.regs.get(reg))?;
                }
                self.regs.pc += 2;
            }
            OpCode::LoadRegisters(x) => {
                for reg in 0..=x {
                    let val = self.mem.get(self.regs.i + u16::from(reg))?;
                    self.regs.set(reg, val);
                }
                self.regs.i += u16::from(x) + 1;
                self.regs.pc += 2;
            }
        }
        Ok(())
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
