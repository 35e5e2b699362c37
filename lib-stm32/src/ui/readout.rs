use core::fmt::{self, Write};

use heapless::String;

pub const READOUT_LINE_CAPACITY: usize = 40;
// 96 px wide at 6 px per glyph
pub const READOUT_LINE_COLUMNS: usize = 16;

pub type ReadoutLine = String<READOUT_LINE_CAPACITY>;

/// Sensor values shown on the OLED while the readout button is held.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    pub lux: u32,
    /// tenths of a degree C
    pub temperature: i32,
    pub accel: (i8, i8, i8),
}

impl Readout {
    pub const ROWS: [u8; 5] = [1, 10, 20, 30, 40];

    pub fn lines(&self) -> [(u8, ReadoutLine); 5] {
        let (x, y, z) = self.accel;
        [
            (Self::ROWS[0], lux_line(self.lux)),
            (Self::ROWS[1], temperature_line(self.temperature)),
            (Self::ROWS[2], axis_line("AX", x)),
            (Self::ROWS[3], axis_line("AY", y)),
            (Self::ROWS[4], axis_line("AZ", z)),
        ]
    }
}

pub fn lux_line(lux: u32) -> ReadoutLine {
    format_line(format_args!("LUX is {}", lux))
}

pub fn temperature_line(tenths: i32) -> ReadoutLine {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    format_line(format_args!("T: {}{}.{}", sign, abs / 10, abs % 10))
}

pub fn axis_line(label: &str, value: i8) -> ReadoutLine {
    format_line(format_args!("{}: {}", label, value))
}

// pad with blanks so a shorter value overwrites the previous one on screen
fn format_line(args: fmt::Arguments) -> ReadoutLine {
    let mut line = ReadoutLine::new();
    if line.write_fmt(args).is_err() {
        warn!("readout line truncated");
    }

    while line.len() < READOUT_LINE_COLUMNS {
        if line.push(' ').is_err() {
            break;
        }
    }

    line
}
