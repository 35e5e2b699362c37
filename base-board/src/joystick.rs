use baseboard_lib_stm32::ui::cursor::JoystickState;
use embassy_stm32::gpio::{AnyPin, Input, Pin, Pull};

use crate::pins::{
    JoystickCenterPin, JoystickDownPin, JoystickLeftPin, JoystickRightPin, JoystickUpPin,
};

/// Five-way joystick, one active-low switch per direction.
pub struct Joystick<'d> {
    center: Input<'d, AnyPin>,
    up: Input<'d, AnyPin>,
    down: Input<'d, AnyPin>,
    left: Input<'d, AnyPin>,
    right: Input<'d, AnyPin>,
}

impl<'d> Joystick<'d> {
    pub fn new(
        center: JoystickCenterPin,
        up: JoystickUpPin,
        down: JoystickDownPin,
        left: JoystickLeftPin,
        right: JoystickRightPin,
    ) -> Self {
        Joystick {
            center: Input::new(center.degrade(), Pull::Up),
            up: Input::new(up.degrade(), Pull::Up),
            down: Input::new(down.degrade(), Pull::Up),
            left: Input::new(left.degrade(), Pull::Up),
            right: Input::new(right.degrade(), Pull::Up),
        }
    }

    pub fn read(&self) -> JoystickState {
        let mut bits = 0;

        if self.center.is_low() {
            bits |= JoystickState::CENTER;
        }
        if self.up.is_low() {
            bits |= JoystickState::UP;
        }
        if self.down.is_low() {
            bits |= JoystickState::DOWN;
        }
        if self.left.is_low() {
            bits |= JoystickState::LEFT;
        }
        if self.right.is_low() {
            bits |= JoystickState::RIGHT;
        }

        JoystickState(bits)
    }
}
