use baseboard_lib_stm32::{
    audio::{
        note::{note_half_period_us, Beat},
        songs::SongId,
        tone_player::{ElapsedAccounting, TonePlayer},
        tune::Tune,
    },
    config::SEQUENCER_CONFIG,
    drivers::audio::{LineLevel, WaveformDriver},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Event {
    Line(LineLevel),
    WaitUs(u32),
    WaitMs(u32),
}

/// Simulated clock that records everything written to the line.
#[derive(Default)]
struct SimDriver {
    events: Vec<Event>,
    now_us: u64,
}

impl SimDriver {
    fn toggles(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Line(_)))
            .count()
    }

    fn ms_waits(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::WaitMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    fn time_high_us(&self) -> u64 {
        let mut level = LineLevel::Low;
        let mut high = 0;
        for e in &self.events {
            match e {
                Event::Line(l) => level = *l,
                Event::WaitUs(us) if level == LineLevel::High => high += *us as u64,
                Event::WaitMs(ms) if level == LineLevel::High => high += *ms as u64 * 1000,
                _ => {}
            }
        }
        high
    }
}

impl WaveformDriver for SimDriver {
    fn set_line(&mut self, level: LineLevel) {
        self.events.push(Event::Line(level));
    }

    fn wait_micros(&mut self, us: u32) {
        self.now_us += us as u64;
        self.events.push(Event::WaitUs(us));
    }

    fn wait_millis(&mut self, ms: u32) {
        self.now_us += ms as u64 * 1000;
        self.events.push(Event::WaitMs(ms));
    }
}

fn play(tune: &str, accounting: ElapsedAccounting) -> SimDriver {
    let mut player = TonePlayer::new_with_accounting(SimDriver::default(), accounting);
    player.play_song(tune);
    player.release()
}

#[test]
fn empty_song_is_silent() {
    let driver = play("", ElapsedAccounting::default());
    assert!(driver.events.is_empty());
    assert_eq!(driver.now_us, 0);
}

#[test]
fn single_triplet_plays_one_note() {
    let driver = play("C2.", ElapsedAccounting::HalfPeriodPerCycle);

    // 400 ms counted in 3816 us steps
    let cycles = (400_000 + 3815) / 3816;
    assert_eq!(driver.toggles(), 2 * cycles);
    assert_eq!(driver.ms_waits(), vec![20]);
    assert_eq!(driver.events.last(), Some(&Event::WaitMs(20)));
    assert_eq!(driver.now_us, 2 * 3816 * cycles as u64 + 20_000);
}

#[test]
fn note_waveform_alternates_high_low() {
    let driver = play("a1+", ElapsedAccounting::FullCycle);

    let half = note_half_period_us(b'a');
    let note_events = &driver.events[..driver.events.len() - 1];
    for cycle in note_events.chunks(4) {
        assert_eq!(
            cycle,
            &[
                Event::Line(LineLevel::High),
                Event::WaitUs(half),
                Event::Line(LineLevel::Low),
                Event::WaitUs(half),
            ]
        );
    }
    assert_eq!(driver.events.last(), Some(&Event::WaitMs(0)));
}

#[test]
fn dangling_note_is_not_played() {
    let full = play("C2.", ElapsedAccounting::default());
    let dangling = play("C2.C", ElapsedAccounting::default());
    assert_eq!(full.events, dangling.events);

    let pair = play("C2.C4", ElapsedAccounting::default());
    assert_eq!(full.events, pair.events);
}

#[test]
fn rest_blocks_for_its_duration() {
    let driver = play("X2+", ElapsedAccounting::default());
    assert_eq!(driver.toggles(), 0);
    assert_eq!(driver.events, vec![Event::WaitMs(400), Event::WaitMs(0)]);

    let mut player = TonePlayer::new(SimDriver::default());
    player.play_beat(&Beat::from_codes(b'?', b'2'));
    let driver = player.release();
    assert_eq!(driver.events, vec![Event::WaitMs(400)]);
    assert_eq!(driver.now_us, 400_000);
}

#[test]
fn line_idles_low_between_notes() {
    let driver = play("C1_D1_", ElapsedAccounting::FullCycle);

    let mut level = LineLevel::Low;
    for e in &driver.events {
        match e {
            Event::Line(l) => level = *l,
            Event::WaitMs(_) => assert_eq!(level, LineLevel::Low),
            Event::WaitUs(_) => {}
        }
    }
    assert_eq!(driver.ms_waits(), vec![30, 30]);
}

#[test]
fn legacy_accounting_is_twice_full_cycle() {
    let legacy = play("E5,", ElapsedAccounting::HalfPeriodPerCycle);
    let corrected = play("E5,", ElapsedAccounting::FullCycle);

    // 1000 ms of E: 3030 us half-period
    assert_eq!(corrected.time_high_us(), 166 * 3030);
    assert_eq!(legacy.time_high_us(), 331 * 3030);
}

#[test]
fn nul_ends_the_tune() {
    let mut player = TonePlayer::new(SimDriver::default());
    player.play_song(Tune::new(b"X1+\0C2."));
    let driver = player.release();
    assert_eq!(driver.events, vec![Event::WaitMs(200), Event::WaitMs(0)]);
}

#[test]
fn stored_songs_play_every_step() {
    for id in SongId::ALL {
        let mut player = TonePlayer::with_config(SimDriver::default(), &SEQUENCER_CONFIG);
        player.play_song(id.tune());
        let driver = player.release();

        // one pause per step, plus one wait per rest
        let rests = id
            .tune()
            .steps()
            .filter(|s| matches!(s.beat, Beat::Rest(_)))
            .count();
        assert_eq!(driver.ms_waits().len(), id.tune().len_steps() + rests);
    }
}
