use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};

use crate::display::{FrameBuffer, HEIGHT, WIDTH};

const OFF_COLOR: u32 = 0x00_00_00;
const ON_COLOR: u32 = 0x00_7F_FF;

/// Window frontend. Read-only observer of the framebuffer: converts the 1-bit
/// grid to RGB and pushes it to a minifb window at ~60 Hz.
pub struct Screen {
    window: Window,
    pixel_buffer: Vec<u32>,
}

impl Screen {
    pub fn new() -> Result<Self, minifb::Error> {
        let mut window = Window::new(
            "chip8vm - ESC to exit",
            WIDTH,
            HEIGHT,
            WindowOptions {
                scale: Scale::X16,
                ..WindowOptions::default()
            },
        )?;
        // Limit to max ~60 fps update rate; this is also the step cadence.
        window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));
        Ok(Self {
            window,
            pixel_buffer: vec![0; WIDTH * HEIGHT],
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn is_running(&self) -> bool {
        self.window.is_open() && !self.window.is_key_pressed(Key::Escape, KeyRepeat::Yes)
    }

    pub fn render(&mut self, fb: &FrameBuffer) -> Result<(), minifb::Error> {
        for (cell, &bit) in self.pixel_buffer.iter_mut().zip(fb.pixels()) {
            *cell = if bit == 1 { ON_COLOR } else { OFF_COLOR };
        }
        self.window
            .update_with_buffer(&self.pixel_buffer, WIDTH, HEIGHT)
    }

    /// Keeps the window and its input state alive on ticks with no redraw.
    pub fn refresh(&mut self) {
        self.window.update();
    }
}
