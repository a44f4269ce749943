use minifb::{Key, Window};

use crate::emulator::Keys;

/// Maps the physical keyboard onto the 16-key hex pad and holds one snapshot
/// of pressed keys per tick. Layout:
///
/// ```text
/// pad 1 2 3 C      keys 1 2 3 4
///     4 5 6 D           Q W E R
///     7 8 9 E           A S D F
///     A 0 B F           Z X C V
/// ```
pub struct Keyboard {
    keys: Keys,
}

impl Keyboard {
    pub fn new() -> Self {
        Self { keys: [false; 16] }
    }

    /// Rebuilds the snapshot from whatever is currently held down. Called
    /// once per tick, before the interpreter step.
    pub fn poll(&mut self, window: &Window) {
        self.keys = [false; 16];
        for key in window.get_keys() {
            if let Some(code) = Self::key_to_code(key) {
                self.keys[code as usize] = true;
            }
        }
    }

    pub fn snapshot(&self) -> &Keys {
        &self.keys
    }

    fn key_to_code(key: Key) -> Option<u8> {
        match key {
            Key::Key1 => Some(0x1),
            Key::Key2 => Some(0x2),
            Key::Key3 => Some(0x3),
            Key::Key4 => Some(0xC),
            Key::Q => Some(0x4),
            Key::W => Some(0x5),
            Key::E => Some(0x6),
            Key::R => Some(0xD),
            Key::A => Some(0x7),
            Key::S => Some(0x8),
            Key::D => Some(0x9),
            Key::F => Some(0xE),
            Key::Z => Some(0xA),
            Key::X => Some(0x0),
            Key::C => Some(0xB),
            Key::V => Some(0xF),
            _ => None,
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qwerty_rows_map_to_pad_columns() {
        assert_eq!(Keyboard::key_to_code(Key::Key4), Some(0xC));
        assert_eq!(Keyboard::key_to_code(Key::X), Some(0x0));
        assert_eq!(Keyboard::key_to_code(Key::V), Some(0xF));
        assert_eq!(Keyboard::key_to_code(Key::Space), None);
    }
}
