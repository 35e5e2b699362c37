// Compile-time configuration for the demo and the sequencer.

use crate::audio::{songs::SongId, tone_player::ElapsedAccounting};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerConfig {
    pub accounting: ElapsedAccounting,
}

// keep legacy timing until the tunes are re-timed for FullCycle
pub const SEQUENCER_CONFIG: SequencerConfig = SequencerConfig {
    accounting: ElapsedAccounting::HalfPeriodPerCycle,
};

pub const DEMO_SONG: SongId = SongId::Intro;

// main loop
pub const DEMO_LOOP_PERIOD_MS: u64 = 1;
pub const READOUT_HOLD_MS: u64 = 500;

// LED bar
pub const LED_BAR_LEN: u8 = 16;
pub const LED_BAR_START_POS: u8 = 2;
pub const LED_BAR_STEPS: u8 = 1;

// accelerometer, raw counts with 1 g = 64
pub const ACCEL_ONE_G: i8 = 64;
pub const TILT_DEADBAND: i8 = 1;
pub const TILT_BASE_DELAY: u8 = 40;

// OLED
pub const OLED_DISPLAY_WIDTH: u8 = 96;
pub const OLED_DISPLAY_HEIGHT: u8 = 64;
pub const CURSOR_START_X: u8 = 48;
pub const CURSOR_START_Y: u8 = 32;
// cursor acts on every (CURSOR_MOVE_DIVIDER + 1)th joystick poll
pub const CURSOR_MOVE_DIVIDER: u8 = 3;
