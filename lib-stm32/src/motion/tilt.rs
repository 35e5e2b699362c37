use crate::anim::led_bar::BarDirection;
use crate::config::{ACCEL_ONE_G, TILT_BASE_DELAY, TILT_DEADBAND};

/// Zero-g offsets captured from a reading taken with the board lying flat.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelCalibration {
    x_offset: i32,
    y_offset: i32,
    z_offset: i32,
}

impl AccelCalibration {
    pub const fn from_rest(x: i8, y: i8, z: i8) -> Self {
        AccelCalibration {
            x_offset: -(x as i32),
            y_offset: -(y as i32),
            z_offset: ACCEL_ONE_G as i32 - z as i32,
        }
    }

    /// Offsets are applied with the sensor's 8 bit wrapping.
    pub const fn apply(&self, x: i8, y: i8, z: i8) -> (i8, i8, i8) {
        (
            (x as i32 + self.x_offset) as i8,
            (y as i32 + self.y_offset) as i8,
            (z as i32 + self.z_offset) as i8,
        )
    }
}

/// Turns the calibrated y tilt into LED bar steps; steeper tilt, faster bar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TiltStepper {
    wait: u8,
}

impl TiltStepper {
    pub const fn new() -> Self {
        TiltStepper { wait: 0 }
    }

    /// Polls to wait between steps for a tilt magnitude.
    pub const fn step_delay(tilt: u8) -> u8 {
        TILT_BASE_DELAY / (1 + tilt / 10)
    }

    /// Called once per loop with the calibrated y reading. Returns the
    /// direction to move the bar in when it is time to step.
    pub fn poll(&mut self, y: i8) -> Option<BarDirection> {
        let (dir, tilt) = if y < 0 {
            (BarDirection::Forward, y.wrapping_neg())
        } else {
            (BarDirection::Backward, y)
        };

        if tilt <= TILT_DEADBAND {
            return None;
        }

        let waited = self.wait;
        self.wait = self.wait.wrapping_add(1);

        if waited > Self::step_delay(tilt as u8) {
            self.wait = 0;
            Some(dir)
        } else {
            None
        }
    }
}
