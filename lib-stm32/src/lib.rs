#![cfg_attr(not(test), no_std)]

// must stay first so the logging macros are visible to the other modules
#[macro_use]
pub(crate) mod fmt;

pub mod anim;
pub mod audio;
pub mod config;
pub mod demo;
pub mod drivers;
pub mod motion;
pub mod ui;
