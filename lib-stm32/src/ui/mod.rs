pub mod cursor;
pub mod readout;
