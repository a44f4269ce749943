/// 8-bit countdown timer. Decremented once per interpreter step while
/// positive, clamped at zero.
#[derive(Debug, Default)]
pub struct Timer {
    count: u8,
}

impl Timer {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn set(&mut self, value: u8) {
        self.count = value;
    }

    pub fn get(&self) -> u8 {
        self.count
    }

    pub fn tick(&mut self) {
        if self.count > 0 {
            self.count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_down_to_zero_and_stays() {
        let mut timer = Timer::new();
        timer.set(2);
        timer.tick();
        assert_eq!(timer.get(), 1);
        timer.tick();
        assert_eq!(timer.get(), 0);
        timer.tick();
        assert_eq!(timer.get(), 0);
    }
}
