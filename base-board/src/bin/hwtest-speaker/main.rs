#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use baseboard_demo::audio::{new_speaker, SpeakerAmp};
use baseboard_lib_stm32::audio::{
    songs::SongId,
    tone_player::{ElapsedAccounting, TonePlayer},
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("speaker hwtest");

    let _amp = SpeakerAmp::new(p.PC7, p.PC8, p.PC9);
    let mut tone_player = TonePlayer::new(new_speaker(p.PC6));

    // scope the pin: A should read 2272 us high, 2272 us low (220 Hz)
    tone_player.play_note(2272, 1000);
    Timer::after_millis(500).await;

    for accounting in [ElapsedAccounting::HalfPeriodPerCycle, ElapsedAccounting::FullCycle] {
        tone_player.set_accounting(accounting);

        for id in SongId::ALL {
            info!("playing {} with {}", id, accounting);
            tone_player.play_song(id.tune());
            Timer::after_millis(1000).await;
        }
    }

    info!("speaker hwtest done");

    loop {
        Timer::after_millis(1000).await;
    }
}
