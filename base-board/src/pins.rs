use embassy_stm32::peripherals::*;

///////////////
//  speaker  //
///////////////

pub type SpeakerPin = PC6;

// LM4811 volume control, all low leaves the amplifier enabled at default gain
pub type AmpClockPin = PC7;
pub type AmpUpDownPin = PC8;
pub type AmpShutdownPin = PC9;

///////////////
//  User IO  //
///////////////

pub type IndicatorRedPin = PD0;
pub type IndicatorBluePin = PD1;

pub type ReadoutButtonPin = PB15;

pub type JoystickCenterPin = PE0;
pub type JoystickUpPin = PE1;
pub type JoystickDownPin = PE2;
pub type JoystickLeftPin = PE3;
pub type JoystickRightPin = PE4;
