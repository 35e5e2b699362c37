#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use baseboard_demo::{
    audio::{new_speaker, SpeakerAmp},
    joystick::Joystick,
    user_io::{Indicators, ReadoutButton},
};
use baseboard_lib_stm32::{
    audio::tone_player::TonePlayer,
    config::{ACCEL_ONE_G, DEMO_LOOP_PERIOD_MS, DEMO_SONG, SEQUENCER_CONFIG},
    demo::{DemoInputs, DemoState, Screen},
    ui::cursor::CursorAction,
};

const ACCEL_AT_REST: (i8, i8, i8) = (0, 0, ACCEL_ONE_G);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("base board demo starting");

    let amp = SpeakerAmp::new(p.PC7, p.PC8, p.PC9);
    debug!("speaker amp enabled: {}", amp.is_enabled());

    let mut indicators = Indicators::new(p.PD0, p.PD1);
    let readout_btn = ReadoutButton::new(p.PB15);
    let joystick = Joystick::new(p.PE0, p.PE1, p.PE2, p.PE3, p.PE4);

    let mut tone_player = TonePlayer::with_config(new_speaker(p.PC6), &SEQUENCER_CONFIG);

    info!("playing {}", DEMO_SONG);
    tone_player.play_song(DEMO_SONG.tune());

    // TODO: sample the accelerometer, light and temperature sensors once their I2C drivers are ported
    let mut demo = DemoState::new(ACCEL_AT_REST);
    debug!("led bar {=u16:#x}", demo.initial_bar_mask());

    loop {
        let inputs = DemoInputs {
            accel: ACCEL_AT_REST,
            joystick: joystick.read(),
            readout_requested: readout_btn.is_pressed(),
            lux: 0,
            temperature: 0,
        };

        let frame = demo.tick(&inputs);

        if let Some(mask) = frame.led_bar {
            debug!("led bar {=u16:#x}", mask);
        }

        match frame.cursor {
            CursorAction::Plot { x, y } => trace!("cursor plot ({}, {})", x, y),
            CursorAction::Clear => debug!("screen cleared by joystick"),
            CursorAction::None => {}
        }

        indicators.set(frame.indicators);

        match frame.screen {
            Screen::Readout(readout) => {
                for (row, line) in readout.lines() {
                    info!("[{}] {=char} | {}", row, frame.seven_segment as char, line.as_str());
                }
            }
            Screen::Clear => {
                trace!("{=char} | screen cleared", frame.seven_segment as char);
            }
        }

        Timer::after_millis(frame.hold_ms + DEMO_LOOP_PERIOD_MS).await;
    }
}
