use super::tune::Tune;

pub const INTRO_TUNE: &[u8] = b"C2.C2,D4,C4,F4,E8,";

pub const BIRTHDAY_TUNE: &[u8] =
    b"C2.C2,D4,C4,F4,E8,C2.C2,D4,C4,G4,F8,C2.C2,c4,A4,F4,E4,D4,A2.A2,H4,F4,G4,F8,";

pub const CHRISTMAS_CAROL_TUNE: &[u8] =
    b"D4,B4,B4,A4,A4,G4,E4,D4.D2,E4,E4,A4,F4,D8.D4,d4,d4,c4,c4,B4,G4,E4.E2,F4,F4,A4,A4,G8,";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SongId {
    Intro,
    Birthday,
    ChristmasCarol,
}

impl SongId {
    pub const ALL: [SongId; 3] = [SongId::Intro, SongId::Birthday, SongId::ChristmasCarol];

    pub const fn tune(self) -> Tune<'static> {
        match self {
            SongId::Intro => Tune::new(INTRO_TUNE),
            SongId::Birthday => Tune::new(BIRTHDAY_TUNE),
            SongId::ChristmasCarol => Tune::new(CHRISTMAS_CAROL_TUNE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::note::Beat;

    #[test]
    fn stored_tunes_have_no_dangling_notes() {
        for id in SongId::ALL {
            assert_eq!(id.tune().as_bytes().len() % 3, 0, "{:?}", id);
        }
    }

    #[test]
    fn intro_step_count() {
        assert_eq!(SongId::Intro.tune().len_steps(), 6);
    }

    #[test]
    fn birthday_unknown_note_rests() {
        let rests = SongId::Birthday
            .tune()
            .steps()
            .filter(|step| matches!(step.beat, Beat::Rest(_)))
            .count();
        assert_eq!(rests, 1);
    }
}
