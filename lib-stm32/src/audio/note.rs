/// Half-period in microseconds per note letter, ordered `A..=G` then `a..=g`.
///
/// Each polarity is held for the full value, so the line toggles an octave
/// below the note the letter names (`A` plays at 220 Hz, not 440 Hz).
pub const NOTE_HALF_PERIODS_US: [u32; 14] = [
    2272, // A - 220 Hz
    2024, // B - 247 Hz
    3816, // C - 131 Hz
    3401, // D - 147 Hz
    3030, // E - 165 Hz
    2865, // F - 175 Hz
    2551, // G - 196 Hz
    1136, // a - 440 Hz
    1012, // b - 494 Hz
    1912, // c - 262 Hz
    1703, // d - 294 Hz
    1517, // e - 330 Hz
    1432, // f - 349 Hz
    1275, // g - 392 Hz
];

const OCTAVE_LEN: usize = 7;

pub const DURATION_STEP_MS: u32 = 200;
pub const DEFAULT_DURATION_MS: u32 = 400;
pub const DEFAULT_PAUSE_MS: u32 = 5;

/// Half-period for a note letter, 0 (rest) for anything that isn't one.
pub const fn note_half_period_us(code: u8) -> u32 {
    match code {
        b'A'..=b'G' => NOTE_HALF_PERIODS_US[(code - b'A') as usize],
        b'a'..=b'g' => NOTE_HALF_PERIODS_US[(code - b'a') as usize + OCTAVE_LEN],
        _ => 0,
    }
}

/// Frequency the line toggles at for a half-period, 0 for a rest.
pub const fn tone_hz(half_period_us: u32) -> u32 {
    if half_period_us == 0 {
        0
    } else {
        (1_000_000 / (2 * half_period_us as u64)) as u32
    }
}

pub const fn duration_ms(code: u8) -> u32 {
    match code {
        b'0'..=b'9' => (code - b'0') as u32 * DURATION_STEP_MS,
        _ => DEFAULT_DURATION_MS,
    }
}

pub const fn pause_ms(code: u8) -> u32 {
    match code {
        b'+' => 0,
        b',' => 5,
        b'.' => 20,
        b'_' => 30,
        _ => DEFAULT_PAUSE_MS,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Beat {
    Note { half_period_us: u32, duration_ms: u32 },
    Rest(u32),
}

impl Beat {
    pub const fn from_codes(note: u8, duration: u8) -> Self {
        let half_period_us = note_half_period_us(note);
        let duration_ms = duration_ms(duration);

        if half_period_us == 0 {
            Beat::Rest(duration_ms)
        } else {
            Beat::Note { half_period_us, duration_ms }
        }
    }

    pub const fn duration_ms(&self) -> u32 {
        match *self {
            Beat::Note { duration_ms, .. } => duration_ms,
            Beat::Rest(duration_ms) => duration_ms,
        }
    }

    /// 0 for a rest, matching the table lookup convention.
    pub const fn half_period_us(&self) -> u32 {
        match *self {
            Beat::Note { half_period_us, .. } => half_period_us,
            Beat::Rest(_) => 0,
        }
    }
}

/// One decoded note/duration/pause triplet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub beat: Beat,
    pub pause_ms: u32,
}

impl Step {
    pub const fn from_codes(note: u8, duration: u8, pause: u8) -> Self {
        Step {
            beat: Beat::from_codes(note, duration),
            pause_ms: pause_ms(pause),
        }
    }
}
