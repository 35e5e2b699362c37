use crate::config::SequencerConfig;
use crate::drivers::audio::{LineLevel, WaveformDriver};

use super::note::{Beat, Step};
use super::tune::Tune;

/// How time spent inside a note is counted against its duration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ElapsedAccounting {
    /// One half-period is counted per emitted high+low cycle, so the note
    /// sounds for roughly twice its nominal duration. Legacy timing.
    #[default]
    HalfPeriodPerCycle,
    /// Both half-periods are counted, the note sounds for its nominal
    /// duration rounded up to a whole cycle.
    FullCycle,
}

impl ElapsedAccounting {
    const fn per_cycle_us(self, half_period_us: u32) -> u64 {
        match self {
            ElapsedAccounting::HalfPeriodPerCycle => half_period_us as u64,
            ElapsedAccounting::FullCycle => 2 * half_period_us as u64,
        }
    }
}

pub struct TonePlayer<D: WaveformDriver> {
    audio_driver: D,
    accounting: ElapsedAccounting,
}

impl<D: WaveformDriver> TonePlayer<D> {
    pub fn new(audio_driver: D) -> Self {
        Self::new_with_accounting(audio_driver, ElapsedAccounting::default())
    }

    pub fn new_with_accounting(audio_driver: D, accounting: ElapsedAccounting) -> Self {
        TonePlayer {
            audio_driver,
            accounting,
        }
    }

    pub fn with_config(audio_driver: D, config: &SequencerConfig) -> Self {
        Self::new_with_accounting(audio_driver, config.accounting)
    }

    pub fn accounting(&self) -> ElapsedAccounting {
        self.accounting
    }

    pub fn set_accounting(&mut self, accounting: ElapsedAccounting) {
        self.accounting = accounting;
    }

    pub fn driver(&self) -> &D {
        &self.audio_driver
    }

    pub fn release(self) -> D {
        self.audio_driver
    }

    /// Square wave at `half_period_us` per polarity for `duration_ms`.
    /// A zero half-period is a rest and just blocks.
    pub fn play_note(&mut self, half_period_us: u32, duration_ms: u32) {
        if half_period_us == 0 {
            self.audio_driver.wait_millis(duration_ms);
            return;
        }

        let target_us = duration_ms as u64 * 1000;
        let per_cycle_us = self.accounting.per_cycle_us(half_period_us);
        let mut elapsed_us: u64 = 0;

        while elapsed_us < target_us {
            self.audio_driver.set_line(LineLevel::High);
            self.audio_driver.wait_micros(half_period_us);

            self.audio_driver.set_line(LineLevel::Low);
            self.audio_driver.wait_micros(half_period_us);

            elapsed_us += per_cycle_us;
        }
    }

    pub fn play_beat(&mut self, beat: &Beat) {
        match *beat {
            Beat::Note { half_period_us, duration_ms } => {
                self.play_note(half_period_us, duration_ms);
            },
            Beat::Rest(duration_ms) => {
                self.play_note(0, duration_ms);
            },
        }
    }

    pub fn play_step(&mut self, step: &Step) {
        self.play_beat(&step.beat);
        self.audio_driver.wait_millis(step.pause_ms);
    }

    /// Plays every complete triplet of `tune` in order, then returns.
    pub fn play_song<'a>(&mut self, tune: impl Into<Tune<'a>>) {
        let tune = tune.into();
        debug!("playing tune with {} steps", tune.len_steps());

        for step in tune.steps() {
            trace!("step {}", step);
            self.play_step(&step);
        }
    }
}
