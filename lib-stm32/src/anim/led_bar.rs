use crate::config::{LED_BAR_LEN, LED_BAR_START_POS};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BarDirection {
    Forward,
    Backward,
}

/// Three lit LEDs chasing around a 16-LED bar.
///
/// `pos` is the highest lit LED; the window wraps from LED 15 back to 0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LedBar {
    pos: u8,
}

impl LedBar {
    pub const fn new() -> Self {
        Self::new_at(LED_BAR_START_POS)
    }

    pub const fn new_at(pos: u8) -> Self {
        LedBar { pos: pos % LED_BAR_LEN }
    }

    pub const fn pos(&self) -> u8 {
        self.pos
    }

    pub const fn mask(&self) -> u16 {
        Self::mask_at(self.pos)
    }

    pub const fn mask_at(pos: u8) -> u16 {
        match pos % LED_BAR_LEN {
            0 => (1 << 0) | (3 << 14),
            1 => (3 << 0) | (1 << 15),
            p => 0x07 << (p - 2),
        }
    }

    /// Moves the window and returns the mask to latch, which is the one for
    /// the position before the move.
    pub fn step(&mut self, dir: BarDirection, steps: u8) -> u16 {
        let mask = self.mask();
        let steps = steps % LED_BAR_LEN;

        self.pos = match dir {
            BarDirection::Forward => (self.pos + steps) % LED_BAR_LEN,
            BarDirection::Backward => (self.pos + LED_BAR_LEN - steps) % LED_BAR_LEN,
        };

        mask
    }
}

impl Default for LedBar {
    fn default() -> Self {
        Self::new()
    }
}
