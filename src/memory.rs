use crate::error::Chip8Error;

pub type TypeAddr = u16; // in reality u12

pub const MEMORY_SIZE: usize = 4096;
// font data stored from 0x050 -> 0x09F (0x000 -> 0x04F is empty by convention)
pub const FONT_BASE: TypeAddr = 0x50;
// program bytes start at 0x200
pub const PROGRAM_BASE: TypeAddr = 0x200;
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_BASE as usize;

type FontBytes = [u8; 5 * 16];

const DEFAULT_FONT: FontBytes = [
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

/// 4k byte-addressable store shared by the font region, the program region
/// and everything I-relative opcodes touch. Reads and writes are bounds
/// checked; there is no silent wrap.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut mem = Self {
            bytes: [0; MEMORY_SIZE],
        };
        mem.load_font();
        mem
    }

    pub fn get(&self, addr: TypeAddr) -> Result<u8, Chip8Error> {
        self.bytes
            .get(addr as usize)
            .copied()
            .ok_or(Chip8Error::AddressOutOfBounds { addr })
    }

    pub fn set(&mut self, addr: TypeAddr, val: u8) -> Result<(), Chip8Error> {
        match self.bytes.get_mut(addr as usize) {
            Some(cell) => {
                *cell = val;
                Ok(())
            }
            None => Err(Chip8Error::AddressOutOfBounds { addr }),
        }
    }

    /// Loads program bytes starting at 0x200. Streams that would run past the
    /// end of memory are rejected before anything is written.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_BASE as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    fn load_font(&mut self) {
        let start = FONT_BASE as usize;
        self.bytes[start..start + DEFAULT_FONT.len()].copy_from_slice(&DEFAULT_FONT);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_is_loaded_at_0x50() {
        let mem = Memory::new();
        // glyph 0 starts the table
        assert_eq!(mem.get(FONT_BASE).unwrap(), 0xF0);
        // glyph F ends it
        assert_eq!(mem.get(FONT_BASE + 79).unwrap(), 0x80);
        assert_eq!(mem.get(FONT_BASE + 80).unwrap(), 0x00);
    }

    #[test]
    fn rom_lands_at_0x200() {
        let mut mem = Memory::new();
        mem.load_rom(&[0xAA, 0xBB]).unwrap();
        assert_eq!(mem.get(0x200).unwrap(), 0xAA);
        assert_eq!(mem.get(0x201).unwrap(), 0xBB);
    }

    #[test]
    fn max_size_rom_is_accepted() {
        let mut mem = Memory::new();
        assert!(mem.load_rom(&[0x00; MAX_ROM_SIZE]).is_ok());
        assert_eq!(mem.get(0xFFF).unwrap(), 0x00);
    }

    #[test]
    fn oversized_rom_is_rejected() {
        let mut mem = Memory::new();
        let err = mem.load_rom(&[0x00; MAX_ROM_SIZE + 1]).unwrap_err();
        assert_eq!(
            err,
            Chip8Error::RomTooLarge {
                size: MAX_ROM_SIZE + 1,
                max: MAX_ROM_SIZE
            }
        );
    }

    #[test]
    fn out_of_range_access_errors() {
        let mut mem = Memory::new();
        assert_eq!(
            mem.get(0x1000).unwrap_err(),
            Chip8Error::AddressOutOfBounds { addr: 0x1000 }
        );
        assert_eq!(
            mem.set(0x1000, 0xFF).unwrap_err(),
            Chip8Error::AddressOutOfBounds { addr: 0x1000 }
        );
    }
}
