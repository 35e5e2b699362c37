use num_traits::clamp_max;

use crate::config::{
    CURSOR_MOVE_DIVIDER, CURSOR_START_X, CURSOR_START_Y, OLED_DISPLAY_HEIGHT, OLED_DISPLAY_WIDTH,
};

/// Joystick switch bits as reported by the five-way joystick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickState(pub u8);

impl JoystickState {
    pub const CENTER: u8 = 0x01;
    pub const UP: u8 = 0x02;
    pub const DOWN: u8 = 0x04;
    pub const LEFT: u8 = 0x08;
    pub const RIGHT: u8 = 0x10;

    pub const fn contains(&self, bits: u8) -> bool {
        self.0 & bits != 0
    }

    pub const fn is_idle(&self) -> bool {
        self.0 == 0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorAction {
    None,
    Clear,
    Plot { x: u8, y: u8 },
}

/// Etch-a-sketch style cursor on the OLED.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cursor {
    wait: u8,
    x: u8,
    y: u8,
    last_x: u8,
    last_y: u8,
}

impl Cursor {
    pub const fn new() -> Self {
        Cursor {
            wait: 0,
            x: CURSOR_START_X,
            y: CURSOR_START_Y,
            last_x: 0,
            last_y: 0,
        }
    }

    pub const fn position(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    pub fn update(&mut self, state: JoystickState) -> CursorAction {
        if state.contains(JoystickState::CENTER) {
            return CursorAction::Clear;
        }

        let waited = self.wait;
        self.wait = self.wait.wrapping_add(1);
        if waited < CURSOR_MOVE_DIVIDER {
            return CursorAction::None;
        }
        self.wait = 0;

        if state.contains(JoystickState::UP) {
            self.y = self.y.saturating_sub(1);
        }

        if state.contains(JoystickState::DOWN) {
            self.y = clamp_max(self.y + 1, OLED_DISPLAY_HEIGHT - 1);
        }

        if state.contains(JoystickState::RIGHT) {
            self.x = clamp_max(self.x + 1, OLED_DISPLAY_WIDTH - 1);
        }

        if state.contains(JoystickState::LEFT) {
            self.x = self.x.saturating_sub(1);
        }

        if (self.x, self.y) != (self.last_x, self.last_y) {
            self.last_x = self.x;
            self.last_y = self.y;
            CursorAction::Plot { x: self.x, y: self.y }
        } else {
            CursorAction::None
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
