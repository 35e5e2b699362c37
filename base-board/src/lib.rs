#![no_std]

pub mod audio;
pub mod joystick;
pub mod pins;
pub mod user_io;
