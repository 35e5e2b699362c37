use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};

use crate::pins::{IndicatorBluePin, IndicatorRedPin, ReadoutButtonPin};

/// Red and blue LEDs, lit together while the readout is shown.
pub struct Indicators<'d> {
    red: Output<'d, IndicatorRedPin>,
    blue: Output<'d, IndicatorBluePin>,
}

impl<'d> Indicators<'d> {
    pub fn new(red: IndicatorRedPin, blue: IndicatorBluePin) -> Self {
        Indicators {
            red: Output::new(red, Level::Low, Speed::Low),
            blue: Output::new(blue, Level::Low, Speed::Low),
        }
    }

    pub fn set(&mut self, on: bool) {
        let level = if on { Level::High } else { Level::Low };
        self.red.set_level(level);
        self.blue.set_level(level);
    }

    pub fn is_on(&self) -> bool {
        self.red.is_set_high() && self.blue.is_set_high()
    }
}

/// SW button, active low.
pub struct ReadoutButton<'d> {
    input: Input<'d, ReadoutButtonPin>,
}

impl<'d> ReadoutButton<'d> {
    pub fn new(pin: ReadoutButtonPin) -> Self {
        ReadoutButton {
            input: Input::new(pin, Pull::Up),
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.input.is_low()
    }
}
