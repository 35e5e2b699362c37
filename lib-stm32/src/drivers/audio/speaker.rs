use embassy_stm32::gpio::{AnyPin, Level, Output, Pin, Speed};
use embassy_stm32::Peripheral;
use embassy_time::{block_for, Duration};

use super::{LineLevel, WaveformDriver};

/// Speaker driven straight off a push-pull GPIO, no timer peripheral.
pub struct GpioSpeaker<'d> {
    pin: Output<'d, AnyPin>,
}

impl<'d> GpioSpeaker<'d> {
    pub fn new(pin: Output<'d, AnyPin>) -> Self {
        let mut speaker = GpioSpeaker { pin };
        speaker.set_line(LineLevel::Low);
        speaker
    }

    pub fn new_from_pin(pin: impl Peripheral<P = impl Pin> + 'd) -> Self {
        let pin = Output::new(pin.into_ref().map_into(), Level::Low, Speed::VeryHigh);
        Self::new(pin)
    }

    /// Level currently driven onto the line.
    pub fn line_level(&self) -> LineLevel {
        if self.pin.is_set_high() {
            LineLevel::High
        } else {
            LineLevel::Low
        }
    }
}

impl<'d> WaveformDriver for GpioSpeaker<'d> {
    fn set_line(&mut self, level: LineLevel) {
        match level {
            LineLevel::High => self.pin.set_high(),
            LineLevel::Low => self.pin.set_low(),
        }
    }

    fn wait_micros(&mut self, us: u32) {
        block_for(Duration::from_micros(us.into()));
    }

    fn wait_millis(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms.into()));
    }
}
