use baseboard_lib_stm32::drivers::audio::speaker::GpioSpeaker;
use embassy_stm32::gpio::{Level, Output, Speed};

use crate::pins::{AmpClockPin, AmpShutdownPin, AmpUpDownPin, SpeakerPin};

/// LM4811 volume/shutdown lines. Held low the amplifier stays enabled at
/// its default gain.
pub struct SpeakerAmp<'d> {
    _clock: Output<'d, AmpClockPin>,
    _up_down: Output<'d, AmpUpDownPin>,
    shutdown: Output<'d, AmpShutdownPin>,
}

impl<'d> SpeakerAmp<'d> {
    pub fn new(clock: AmpClockPin, up_down: AmpUpDownPin, shutdown: AmpShutdownPin) -> Self {
        SpeakerAmp {
            _clock: Output::new(clock, Level::Low, Speed::Low),
            _up_down: Output::new(up_down, Level::Low, Speed::Low),
            shutdown: Output::new(shutdown, Level::Low, Speed::Low),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.shutdown.is_set_low()
    }
}

pub fn new_speaker(pin: SpeakerPin) -> GpioSpeaker<'static> {
    GpioSpeaker::new_from_pin(pin)
}
