pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;

/// Monochrome 64x32 framebuffer, one byte per pixel (0 = off, 1 = on),
/// row-major. Sprites are drawn by XOR with edge wraparound.
///
/// The redraw flag is raised whenever a pixel changes or the screen is
/// cleared. It is never cleared internally; the renderer observes it and
/// calls [`FrameBuffer::clear_redraw`] once it has consumed the frame.
pub struct FrameBuffer {
    pixels: [u8; WIDTH * HEIGHT],
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [0; WIDTH * HEIGHT],
            dirty: false,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * WIDTH + x]
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn clear_redraw(&mut self) {
        self.dirty = false;
    }

    pub fn clear(&mut self) {
        self.pixels = [0; WIDTH * HEIGHT];
        self.dirty = true;
    }

    /// XOR-draws an N-byte sprite with its top-left corner at (x, y),
    /// wrapping around both screen edges. Returns true if any pixel that was
    /// on got toggled off (the collision flag).
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, &line) in sprite.iter().enumerate() {
            for bit in 0..8 {
                if line & (0x80 >> bit) == 0 {
                    continue;
                }
                let px = (x as usize + bit) % WIDTH;
                let py = (y as usize + row) % HEIGHT;
                let index = py * WIDTH + px;
                if self.pixels[index] == 1 {
                    collision = true;
                }
                self.pixels[index] ^= 1;
            }
        }
        self.dirty = true;
        collision
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
