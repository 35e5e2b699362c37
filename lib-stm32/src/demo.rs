use crate::anim::led_bar::{BarDirection, LedBar};
use crate::config::{LED_BAR_STEPS, READOUT_HOLD_MS};
use crate::motion::tilt::{AccelCalibration, TiltStepper};
use crate::ui::cursor::{Cursor, CursorAction, JoystickState};
use crate::ui::readout::Readout;

pub const SEGMENT_IDLE: u8 = b'P';
pub const SEGMENT_READOUT: u8 = b'5';

/// Raw readings gathered at the top of one pass of the main loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoInputs {
    pub accel: (i8, i8, i8),
    pub joystick: JoystickState,
    /// SW button, active while held
    pub readout_requested: bool,
    pub lux: u32,
    /// tenths of a degree C
    pub temperature: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Clear,
    Readout(Readout),
}

/// What one pass of the main loop wants shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoFrame {
    /// new LED bar mask, only when the bar moved
    pub led_bar: Option<u16>,
    pub cursor: CursorAction,
    pub seven_segment: u8,
    /// red and blue LEDs
    pub indicators: bool,
    pub screen: Screen,
    pub hold_ms: u64,
}

pub struct DemoState {
    calibration: AccelCalibration,
    stepper: TiltStepper,
    bar: LedBar,
    cursor: Cursor,
}

impl DemoState {
    /// The first accelerometer reading is taken as the board lying flat.
    pub fn new(rest_accel: (i8, i8, i8)) -> Self {
        let (x, y, z) = rest_accel;
        let calibration = AccelCalibration::from_rest(x, y, z);
        debug!("accel calibration {}", calibration);

        DemoState {
            calibration,
            stepper: TiltStepper::new(),
            bar: LedBar::new(),
            cursor: Cursor::new(),
        }
    }

    /// Mask to latch before the first pass.
    pub fn initial_bar_mask(&mut self) -> u16 {
        self.bar.step(BarDirection::Forward, LED_BAR_STEPS)
    }

    pub fn tick(&mut self, inputs: &DemoInputs) -> DemoFrame {
        let (raw_x, raw_y, raw_z) = inputs.accel;
        let (x, y, z) = self.calibration.apply(raw_x, raw_y, raw_z);

        let led_bar = self
            .stepper
            .poll(y)
            .map(|dir| self.bar.step(dir, LED_BAR_STEPS));

        let cursor = if inputs.joystick.is_idle() {
            CursorAction::None
        } else {
            self.cursor.update(inputs.joystick)
        };

        if inputs.readout_requested {
            let readout = Readout {
                lux: inputs.lux,
                temperature: inputs.temperature,
                // y is shown as tilt magnitude
                accel: (x, if y < 0 { y.wrapping_neg() } else { y }, z),
            };

            DemoFrame {
                led_bar,
                cursor,
                seven_segment: SEGMENT_READOUT,
                indicators: true,
                screen: Screen::Readout(readout),
                hold_ms: READOUT_HOLD_MS,
            }
        } else {
            DemoFrame {
                led_bar,
                cursor,
                seven_segment: SEGMENT_IDLE,
                indicators: false,
                screen: Screen::Clear,
                hold_ms: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REST: (i8, i8, i8) = (2, -1, 62);

    #[test]
    fn idle_pass_clears_screen() {
        let mut demo = DemoState::new(REST);
        let frame = demo.tick(&DemoInputs { accel: REST, ..Default::default() });

        assert_eq!(frame.led_bar, None);
        assert_eq!(frame.cursor, CursorAction::None);
        assert_eq!(frame.seven_segment, b'P');
        assert!(!frame.indicators);
        assert_eq!(frame.screen, Screen::Clear);
        assert_eq!(frame.hold_ms, 0);
    }

    #[test]
    fn releasing_button_returns_to_idle_frame() {
        let mut demo = DemoState::new(REST);
        let idle = DemoInputs { accel: REST, ..Default::default() };

        let shown = demo.tick(&DemoInputs { readout_requested: true, ..idle });
        assert_eq!(shown.seven_segment, SEGMENT_READOUT);

        let frame = demo.tick(&idle);
        assert_eq!(frame.seven_segment, SEGMENT_IDLE);
        assert_eq!(frame.screen, Screen::Clear);
        assert!(!frame.indicators);
        assert_eq!(frame.hold_ms, 0);
    }

    #[test]
    fn initial_mask_advances_bar() {
        let mut demo = DemoState::new(REST);
        assert_eq!(demo.initial_bar_mask(), 0x0007);
    }

    #[test]
    fn readout_uses_calibrated_values() {
        let mut demo = DemoState::new(REST);
        let frame = demo.tick(&DemoInputs {
            accel: (12, -21, 62),
            readout_requested: true,
            lux: 300,
            temperature: 215,
            ..Default::default()
        });

        let Screen::Readout(readout) = frame.screen else {
            panic!("expected readout, got {:?}", frame.screen);
        };
        assert_eq!(readout.accel, (10, 20, 64));
        assert_eq!(readout.lux, 300);
        assert_eq!(frame.hold_ms, 500);
        assert_eq!(frame.seven_segment, b'5');
        assert!(frame.indicators);
    }

    #[test]
    fn tilt_moves_bar_forward() {
        let mut demo = DemoState::new((0, 0, 64));
        let inputs = DemoInputs { accel: (0, -30, 64), ..Default::default() };

        // delay for |y| = 30 is 40 / 4 = 10, so every 12th pass steps
        let masks: heapless::Vec<u16, 4> =
            (0..12).filter_map(|_| demo.tick(&inputs).led_bar).collect();
        assert_eq!(masks.as_slice(), &[0x0007]);

        let next = (0..12).find_map(|_| demo.tick(&inputs).led_bar);
        assert_eq!(next, Some(0x000E));
    }

    #[test]
    fn joystick_only_polled_when_pressed() {
        let mut demo = DemoState::new(REST);
        let idle = DemoInputs { accel: REST, ..Default::default() };
        for _ in 0..10 {
            assert_eq!(demo.tick(&idle).cursor, CursorAction::None);
        }

        let right = DemoInputs { joystick: JoystickState(JoystickState::RIGHT), ..idle };
        let plots = (0..8).filter(|_| demo.tick(&right).cursor != CursorAction::None).count();
        assert_eq!(plots, 2);
    }
}
